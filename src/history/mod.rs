//! Game history
//!
//! Finished sessions are turned into `GameRecord`s and handed to a
//! `HistorySink`. Sinks keep records newest first and drop the oldest ones
//! past their capacity.

mod json;
mod memory;

pub use json::JsonHistory;
pub use memory::MemoryHistory;

use crate::error::HistoryError;
use crate::game::GameSummary;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Number of records a sink keeps by default
pub const HISTORY_CAPACITY: usize = 15;

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub player_name: String,
    /// Whole seconds on the session clock
    pub elapsed_secs: u64,
    pub attempts: usize,
    pub played_at: DateTime<Local>,
    #[serde(default = "default_won")]
    pub won: bool,
}

const fn default_won() -> bool {
    true
}

impl GameRecord {
    #[must_use]
    pub fn from_summary(player_name: &str, summary: &GameSummary, played_at: DateTime<Local>) -> Self {
        Self {
            player_name: player_name.to_string(),
            elapsed_secs: summary.elapsed.as_secs(),
            attempts: summary.attempts,
            played_at,
            won: summary.is_win(),
        }
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_secs)
    }
}

/// Receives finished games
pub trait HistorySink {
    /// Store one record
    ///
    /// # Errors
    /// Returns `HistoryError` if the record cannot be persisted.
    fn record(&mut self, record: GameRecord) -> Result<(), HistoryError>;

    /// Stored records, newest first
    ///
    /// # Errors
    /// Returns `HistoryError` if stored records cannot be read.
    fn records(&self) -> Result<Vec<GameRecord>, HistoryError>;
}

/// Insert `record` at the front and drop anything past `capacity`
pub(crate) fn push_newest(records: &mut Vec<GameRecord>, record: GameRecord, capacity: usize) {
    records.insert(0, record);
    records.truncate(capacity);
}
