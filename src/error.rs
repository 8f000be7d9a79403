//! Error types for the game engine

use thiserror::Error;

/// Errors raised while validating a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("word must contain only ASCII letters")]
    InvalidCharacters,
}

/// Errors raised by the tagger and the session state machine
///
/// `IncompleteRow`, `UnknownWord`, `RowFull`, `InvalidLetter` and
/// `NotInProgress` reject a single user action and leave the session
/// untouched. The rest are setup or programming errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },
    #[error("no target word available")]
    NoTargetAvailable,
    #[error("session already started; reset it to play again")]
    AlreadyStarted,
    #[error("attempt cap must be between 1 and 10, got {0}")]
    InvalidAttemptCap(usize),
    #[error("invalid target word: {0}")]
    InvalidWord(#[from] WordError),
    #[error("complete the word before submitting ({filled} of {needed} letters)")]
    IncompleteRow { filled: usize, needed: usize },
    #[error("{0} is not in the word list")]
    UnknownWord(String),
    #[error("the current row is already full")]
    RowFull,
    #[error("'{0}' is not a letter")]
    InvalidLetter(char),
    #[error("no game in progress")]
    NotInProgress,
}

impl GameError {
    /// True for recoverable rejections of a single keystroke or submission
    #[must_use]
    pub const fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            Self::IncompleteRow { .. }
                | Self::UnknownWord(_)
                | Self::RowFull
                | Self::InvalidLetter(_)
                | Self::NotInProgress
        )
    }
}

/// Errors raised by history sinks
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
