//! Command implementations

pub mod check;
pub mod simple;

pub use check::check_guess;
pub use simple::run_simple;

use crate::error::HistoryError;
use crate::game::GameSummary;
use crate::history::{GameRecord, HistorySink};
use chrono::Local;
use tracing::warn;

/// Hand a finished game to the history sink, stamped with the current time
///
/// # Errors
/// Returns the sink's error; it is also logged.
pub fn save_record(
    history: &mut dyn HistorySink,
    player: &str,
    summary: &GameSummary,
) -> Result<(), HistoryError> {
    let record = GameRecord::from_summary(player, summary, Local::now());
    history.record(record).inspect_err(|e| {
        warn!(error = %e, "failed to save game record");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;
    use crate::history::MemoryHistory;
    use std::time::Duration;

    #[test]
    fn save_record_stores_summary() {
        let mut history = MemoryHistory::default();
        let summary = GameSummary {
            outcome: Outcome::Won,
            attempts: 3,
            elapsed: Duration::from_secs(30),
            target: "CRANE".into(),
        };

        save_record(&mut history, "Ada", &summary).unwrap();

        let records = history.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].player_name, "Ada");
        assert_eq!(records[0].attempts, 3);
        assert_eq!(records[0].elapsed_secs, 30);
        assert!(records[0].won);
    }
}
