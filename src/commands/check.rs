//! Single guess evaluation command
//!
//! Tags one guess against a given target without starting a session.

use crate::core::{GuessRow, Word};
use anyhow::{Context, Result, ensure};

/// Evaluate `guess` against `target`
///
/// Both words are validated and upper-cased first, so the comparison is
/// case-insensitive.
///
/// # Errors
///
/// Returns an error if either word is not made of ASCII letters, or if the
/// two words differ in length.
pub fn check_guess(guess: &str, target: &str) -> Result<GuessRow> {
    let target_len = target.trim().chars().count();
    ensure!(target_len > 0, "target word is empty");
    let target = Word::new(target, target_len).context("invalid target word")?;
    let guess = Word::new(guess, target_len).context("invalid guess")?;

    Ok(GuessRow::evaluate(guess.letters(), target.letters())?)
}
