//! Session lifecycle: configuration, clock and the game state machine

pub mod clock;
pub mod config;
pub mod session;

pub use clock::{SessionClock, TICK_INTERVAL, Ticker};
pub use config::{DEFAULT_ATTEMPTS, GameConfig, MAX_ATTEMPTS, MIN_ATTEMPTS};
pub use session::{GameSession, GameSummary, Outcome, SessionState, Submission};
