//! Wordle Session
//!
//! Game engine for a Wordle-style word-guessing game: duplicate-aware guess
//! evaluation, monotonic keyboard state and an attempt-limited session state
//! machine, plus terminal front-ends that drive it.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_session::core::Tag;
//! use wordle_session::game::{GameConfig, GameSession, SessionState};
//!
//! let mut session = GameSession::started("crane", GameConfig::default()).unwrap();
//! for letter in "slate".chars() {
//!     session.append_letter(letter).unwrap();
//! }
//! let submission = session.submit_row(false, |_| true).unwrap();
//!
//! assert_eq!(submission.row.cells()[2], ('A', Tag::Correct));
//! assert_eq!(session.state(), SessionState::InProgress);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Session lifecycle
pub mod game;

// Dictionary access
pub mod words;

// Finished-game records
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
