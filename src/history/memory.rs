//! History kept in memory, for tests and sessions without a history file

use super::{GameRecord, HISTORY_CAPACITY, HistorySink, push_newest};
use crate::error::HistoryError;

/// History kept in memory for the life of the process
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    records: Vec<GameRecord>,
    capacity: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl MemoryHistory {
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }
}

impl HistorySink for MemoryHistory {
    fn record(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        push_newest(&mut self.records, record, self.capacity);
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>, HistoryError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample;

    #[test]
    fn newest_first_and_capped() {
        let mut history = MemoryHistory::with_capacity(2);
        history.record(sample("a", 1)).unwrap();
        history.record(sample("b", 2)).unwrap();
        history.record(sample("c", 3)).unwrap();

        let names: Vec<String> = history
            .records()
            .unwrap()
            .into_iter()
            .map(|r| r.player_name)
            .collect();
        assert_eq!(names, vec!["c", "b"]);
    }
}
