//! History persisted as a JSON array in a single file

use super::{GameRecord, HISTORY_CAPACITY, HistorySink, push_newest};
use crate::error::HistoryError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON-file history, newest record first
#[derive(Debug, Clone)]
pub struct JsonHistory {
    path: PathBuf,
}

impl JsonHistory {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read stored records; a missing file is an empty history
    ///
    /// # Errors
    /// Returns `HistoryError` if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<GameRecord>, HistoryError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, records: &[GameRecord]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl HistorySink for JsonHistory {
    fn record(&mut self, record: GameRecord) -> Result<(), HistoryError> {
        let mut records = self.load()?;
        push_newest(&mut records, record, HISTORY_CAPACITY);
        self.save(&records)?;

        debug!(path = %self.path.display(), count = records.len(), "history saved");
        Ok(())
    }

    fn records(&self) -> Result<Vec<GameRecord>, HistoryError> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::sample;

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonHistory::new(dir.path().join("history.json"));
        assert!(history.load().unwrap().is_empty());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut history = JsonHistory::new(&path);
        history.record(sample("ada", 3)).unwrap();
        history.record(sample("bob", 4)).unwrap();

        let reopened = JsonHistory::new(&path);
        let records = reopened.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].player_name, "bob");
        assert_eq!(records[1], sample("ada", 3));
    }

    #[test]
    fn keeps_only_newest_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = JsonHistory::new(dir.path().join("history.json"));

        for attempts in 1..=(HISTORY_CAPACITY + 3) {
            history.record(sample("p", attempts)).unwrap();
        }

        let records = history.records().unwrap();
        assert_eq!(records.len(), HISTORY_CAPACITY);
        assert_eq!(records[0].attempts, HISTORY_CAPACITY + 3);
        assert_eq!(records[HISTORY_CAPACITY - 1].attempts, 4);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "not json").unwrap();

        let mut history = JsonHistory::new(&path);
        assert!(matches!(history.load(), Err(HistoryError::Json(_))));
        assert!(history.record(sample("p", 1)).is_err());
    }
}
