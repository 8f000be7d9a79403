//! Keyboard state
//!
//! Best verdict seen so far for every guessed letter. Values only ever move
//! up the `Absent < Present < Correct` order.

use super::tag::Tag;
use super::tagger::GuessRow;
use rustc_hash::FxHashMap;

/// Best-known tag per letter across all evaluated rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    best: FxHashMap<char, Tag>,
}

impl KeyState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated row into the state
    ///
    /// Applying the same row twice has no further effect.
    pub fn upgrade(&mut self, row: &GuessRow) {
        for &(letter, tag) in row.cells() {
            let entry = self.best.entry(letter).or_insert(Tag::Absent);
            *entry = (*entry).max(tag);
        }
    }

    /// Best tag for `letter`, or `None` if it was never guessed
    #[must_use]
    pub fn get(&self, letter: char) -> Option<Tag> {
        self.best.get(&letter).copied()
    }

    /// Whether a host that disables dead keys should ignore `letter`
    #[must_use]
    pub fn is_disabled(&self, letter: char, key_disable_on_incorrect: bool) -> bool {
        key_disable_on_incorrect && self.get(letter) == Some(Tag::Absent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Tag)> + '_ {
        self.best.iter().map(|(&c, &t)| (c, t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    pub fn clear(&mut self) {
        self.best.clear();
    }
}
