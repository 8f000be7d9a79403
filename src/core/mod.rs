//! Core domain types for the game
//!
//! Pure evaluation logic: words, tags, guess rows and keyboard state.
//! Nothing here knows about sessions, clocks or I/O.

mod keys;
mod tag;
mod tagger;
mod word;

pub use keys::KeyState;
pub use tag::{Tag, tags_to_emoji};
pub use tagger::{GuessRow, evaluate};
pub use word::{DEFAULT_WORD_LENGTH, Word};
