//! Session configuration

use crate::core::DEFAULT_WORD_LENGTH;
use crate::error::{GameError, Result};

/// Smallest allowed attempt cap
pub const MIN_ATTEMPTS: usize = 1;
/// Largest allowed attempt cap
pub const MAX_ATTEMPTS: usize = 10;
/// Attempt cap used when none is configured
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Inputs consumed by `GameSession::start` and `GameSession::reset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Letters per word
    pub word_length: usize,
    /// Rows allowed before the session is lost
    pub attempt_cap: usize,
    /// Reject guesses that are not in the dictionary
    pub existence_check: bool,
    /// Advisory: hosts should ignore keys known to be absent
    pub key_disable_on_incorrect: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            attempt_cap: DEFAULT_ATTEMPTS,
            existence_check: true,
            key_disable_on_incorrect: true,
        }
    }
}

impl GameConfig {
    /// Default configuration with `attempts` clamped into `[1, 10]`
    #[must_use]
    pub fn with_attempts(attempts: usize) -> Self {
        Self {
            attempt_cap: attempts.clamp(MIN_ATTEMPTS, MAX_ATTEMPTS),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn existence_check(mut self, enabled: bool) -> Self {
        self.existence_check = enabled;
        self
    }

    #[must_use]
    pub const fn key_disable_on_incorrect(mut self, enabled: bool) -> Self {
        self.key_disable_on_incorrect = enabled;
        self
    }

    #[must_use]
    pub const fn word_length(mut self, length: usize) -> Self {
        self.word_length = length;
        self
    }

    /// Check the attempt cap is in range
    ///
    /// # Errors
    /// Returns `GameError::InvalidAttemptCap` if it is not in `[1, 10]`.
    pub fn validate(&self) -> Result<()> {
        if self.attempt_cap < MIN_ATTEMPTS || self.attempt_cap > MAX_ATTEMPTS {
            return Err(GameError::InvalidAttemptCap(self.attempt_cap));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GameConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.attempt_cap, 6);
        assert!(config.existence_check);
        assert!(config.key_disable_on_incorrect);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_attempts_clamps() {
        assert_eq!(GameConfig::with_attempts(0).attempt_cap, 1);
        assert_eq!(GameConfig::with_attempts(4).attempt_cap, 4);
        assert_eq!(GameConfig::with_attempts(25).attempt_cap, 10);
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let mut config = GameConfig::default();
        config.attempt_cap = 0;
        assert_eq!(config.validate(), Err(GameError::InvalidAttemptCap(0)));
        config.attempt_cap = 11;
        assert_eq!(config.validate(), Err(GameError::InvalidAttemptCap(11)));
        config.attempt_cap = 10;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_toggles() {
        let config = GameConfig::with_attempts(3)
            .existence_check(false)
            .key_disable_on_incorrect(false)
            .word_length(4);
        assert!(!config.existence_check);
        assert!(!config.key_disable_on_incorrect);
        assert_eq!(config.word_length, 4);
        assert_eq!(config.attempt_cap, 3);
    }
}
