//! Guess evaluation
//!
//! Compares a guess against the target and produces one tag per column,
//! including correct handling of duplicate letters.

use super::tag::{Tag, tags_to_emoji};
use super::word::letter_counts;
use crate::error::{GameError, Result};

/// Tag every column of `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark all exact matches (Correct) and remove them from the
///    pool of available target letters
/// 2. Second pass, left to right: mark letters still available in the pool
///    as Present, consuming one copy each
///
/// The number of Correct + Present tags for a letter never exceeds its
/// count in the target. Letters are compared exactly; callers normalise case.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the two sequences differ in length.
///
/// # Examples
/// ```
/// use wordle_session::core::{Tag, evaluate};
///
/// let guess: Vec<char> = "EDCBA".chars().collect();
/// let target: Vec<char> = "ABCDE".chars().collect();
/// let tags = evaluate(&guess, &target).unwrap();
///
/// assert_eq!(tags[2], Tag::Correct);
/// assert_eq!(tags[0], Tag::Present);
/// ```
pub fn evaluate(guess: &[char], target: &[char]) -> Result<Vec<Tag>> {
    if guess.len() != target.len() {
        return Err(GameError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut tags = vec![Tag::Absent; guess.len()];
    let mut remaining = letter_counts(target);

    // First pass: exact position matches
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            tags[i] = Tag::Correct;
            if let Some(count) = remaining.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from what is left
    for (i, letter) in guess.iter().enumerate() {
        if tags[i] == Tag::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(letter)
            && *count > 0
        {
            tags[i] = Tag::Present;
            *count -= 1;
        }
    }

    Ok(tags)
}

/// One evaluated guess: letters paired with their tags
///
/// Rows are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    cells: Vec<(char, Tag)>,
}

impl GuessRow {
    /// Evaluate `guess` against `target` and build the row
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if the lengths differ.
    pub fn evaluate(guess: &[char], target: &[char]) -> Result<Self> {
        let tags = evaluate(guess, target)?;
        Ok(Self {
            cells: guess.iter().copied().zip(tags).collect(),
        })
    }

    /// (letter, tag) pairs in column order
    #[must_use]
    pub fn cells(&self) -> &[(char, Tag)] {
        &self.cells
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().map(|&(c, _)| c)
    }

    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.cells.iter().map(|&(_, t)| t)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> String {
        self.letters().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Every column is Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.cells.is_empty() && self.tags().all(|t| t == Tag::Correct)
    }

    /// Render as emoji squares, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        tags_to_emoji(&self.tags().collect::<Vec<_>>())
    }
}
