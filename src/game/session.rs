//! Game session state machine
//!
//! A session moves `Idle → InProgress → {Won | Lost}` and never backwards.
//! Leaving a finished session requires `reset`, which starts a fresh one.

use super::clock::SessionClock;
use super::config::GameConfig;
use crate::core::{GuessRow, KeyState, Word};
use crate::error::{GameError, Result};
use crate::words::WordSource;
use chrono::{DateTime, Local};
use std::time::Duration;
use tracing::{debug, info};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    InProgress,
    Won,
    Lost,
}

impl SessionState {
    /// Won or Lost
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Result of a finished session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub outcome: Outcome,
    /// Rows evaluated, including the winning one
    pub attempts: usize,
    pub elapsed: Duration,
    /// The target word, revealed
    pub target: String,
}

impl GameSummary {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self.outcome, Outcome::Won)
    }
}

/// An accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The evaluated row
    pub row: GuessRow,
    /// Present if this row ended the session
    pub summary: Option<GameSummary>,
}

/// One game: grid of evaluated rows, the row being typed, keyboard state
/// and clock
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    state: SessionState,
    config: GameConfig,
    target: Option<Word>,
    rows: Vec<GuessRow>,
    buffer: Vec<char>,
    keys: KeyState,
    clock: SessionClock,
    started_at: Option<DateTime<Local>>,
    summary: Option<GameSummary>,
}

impl GameSession {
    /// An idle session with no target
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and start a session in one step
    ///
    /// # Errors
    /// Same as [`GameSession::start`].
    pub fn started(target: &str, config: GameConfig) -> Result<Self> {
        let mut session = Self::new();
        session.start(target, config)?;
        Ok(session)
    }

    /// Start an idle session
    ///
    /// # Errors
    /// - `AlreadyStarted` if the session has left `Idle` (use `reset`)
    /// - `InvalidAttemptCap` if the cap is outside `[1, 10]`
    /// - `NoTargetAvailable` if `target` is blank
    /// - `InvalidWord` if `target` is not `word_length` ASCII letters
    pub fn start(&mut self, target: &str, config: GameConfig) -> Result<()> {
        if self.state != SessionState::Idle {
            return Err(GameError::AlreadyStarted);
        }
        self.begin(target, config)
    }

    /// Start using a target drawn from `source`
    ///
    /// # Errors
    /// `NoTargetAvailable` if the source has no word, otherwise as `start`.
    pub fn start_from<S: WordSource + ?Sized>(
        &mut self,
        source: &S,
        config: GameConfig,
    ) -> Result<()> {
        let target = source.target_word().ok_or(GameError::NoTargetAvailable)?;
        self.start(&target, config)
    }

    /// Discard the current game, whatever its state, and start a new one
    ///
    /// # Errors
    /// Same as `start`, except it never fails with `AlreadyStarted`. On error
    /// the previous session is left untouched.
    pub fn reset(&mut self, target: &str, config: GameConfig) -> Result<()> {
        self.begin(target, config)
    }

    /// `reset` with a target drawn from `source`
    ///
    /// # Errors
    /// `NoTargetAvailable` if the source has no word, otherwise as `reset`.
    pub fn reset_from<S: WordSource + ?Sized>(
        &mut self,
        source: &S,
        config: GameConfig,
    ) -> Result<()> {
        let target = source.target_word().ok_or(GameError::NoTargetAvailable)?;
        self.reset(&target, config)
    }

    fn begin(&mut self, target: &str, config: GameConfig) -> Result<()> {
        config.validate()?;
        if target.trim().is_empty() {
            return Err(GameError::NoTargetAvailable);
        }
        let target = Word::new(target, config.word_length)?;

        self.state = SessionState::InProgress;
        self.config = config;
        self.target = Some(target);
        self.rows.clear();
        self.buffer.clear();
        self.keys.clear();
        self.summary = None;
        self.clock.start();
        self.started_at = Some(Local::now());

        info!(
            word_length = config.word_length,
            attempt_cap = config.attempt_cap,
            "session started"
        );
        Ok(())
    }

    /// Type one letter into the current row
    ///
    /// Returns the new row length.
    ///
    /// # Errors
    /// `NotInProgress`, `InvalidLetter` for non-ASCII-letters, or `RowFull`.
    pub fn append_letter(&mut self, letter: char) -> Result<usize> {
        if self.state != SessionState::InProgress {
            return Err(GameError::NotInProgress);
        }
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter));
        }
        if self.buffer.len() >= self.config.word_length {
            return Err(GameError::RowFull);
        }

        self.buffer.push(letter.to_ascii_uppercase());
        Ok(self.buffer.len())
    }

    /// Remove the last typed letter, if any
    pub fn delete_letter(&mut self) -> Option<char> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.buffer.pop()
    }

    /// Submit the current row
    ///
    /// With `existence_check` set, rows rejected by `is_valid_word` are not
    /// charged as an attempt and stay in the buffer for editing.
    ///
    /// # Errors
    /// `NotInProgress`, `IncompleteRow` or `UnknownWord`. The session is
    /// unchanged on error.
    pub fn submit_row<F>(&mut self, existence_check: bool, is_valid_word: F) -> Result<Submission>
    where
        F: Fn(&str) -> bool,
    {
        let Some(target) = self.target.as_ref().filter(|_| self.state == SessionState::InProgress)
        else {
            return Err(GameError::NotInProgress);
        };

        if self.buffer.len() < target.len() {
            return Err(GameError::IncompleteRow {
                filled: self.buffer.len(),
                needed: target.len(),
            });
        }

        let guess: String = self.buffer.iter().collect();
        if existence_check && !is_valid_word(&guess) {
            debug!(%guess, "rejected unknown word");
            return Err(GameError::UnknownWord(guess));
        }

        let row = GuessRow::evaluate(&self.buffer, target.letters())?;
        let won = target.matches(&self.buffer);

        self.keys.upgrade(&row);
        self.rows.push(row.clone());
        self.buffer.clear();
        debug!(%guess, pattern = %row.to_emoji(), attempt = self.rows.len(), "row evaluated");

        let summary = if won {
            Some(self.finish(Outcome::Won))
        } else if self.rows.len() >= self.config.attempt_cap {
            Some(self.finish(Outcome::Lost))
        } else {
            None
        };

        Ok(Submission { row, summary })
    }

    /// Submit the current row, checking words against `source` if the
    /// configuration asks for it
    ///
    /// # Errors
    /// Same as `submit_row`.
    pub fn submit<S: WordSource + ?Sized>(&mut self, source: &S) -> Result<Submission> {
        let existence_check = self.config.existence_check;
        self.submit_row(existence_check, |word| source.is_valid_word(word))
    }

    fn finish(&mut self, outcome: Outcome) -> GameSummary {
        self.state = match outcome {
            Outcome::Won => SessionState::Won,
            Outcome::Lost => SessionState::Lost,
        };
        self.clock.stop();

        let summary = GameSummary {
            outcome,
            attempts: self.rows.len(),
            elapsed: self.clock.elapsed(),
            target: self
                .target
                .as_ref()
                .map(|t| t.text().to_string())
                .unwrap_or_default(),
        };
        info!(
            ?outcome,
            attempts = summary.attempts,
            elapsed_secs = summary.elapsed.as_secs(),
            "session finished"
        );

        self.summary = Some(summary.clone());
        summary
    }

    /// Advance the clock by one tick while the game is in progress
    pub const fn tick(&mut self) -> bool {
        match self.state {
            SessionState::InProgress => self.clock.tick(),
            _ => false,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Evaluated rows, oldest first
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Letters typed into the current row
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    #[must_use]
    pub const fn keys(&self) -> &KeyState {
        &self.keys
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn attempt_cap(&self) -> usize {
        self.config.attempt_cap
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.config.attempt_cap.saturating_sub(self.rows.len())
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.config.word_length
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Local>> {
        self.started_at
    }

    /// The target word, only once the session is over
    #[must_use]
    pub fn target(&self) -> Option<&Word> {
        self.target.as_ref().filter(|_| self.state.is_over())
    }

    /// Summary of the finished session
    #[must_use]
    pub const fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }
}
