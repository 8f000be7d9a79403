//! Dictionary access
//!
//! `WordSource` is what a session needs from a dictionary: a target word
//! and a membership test. `WordList` implements it over the embedded list
//! or a word file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// Supplies target words and validates guesses
pub trait WordSource {
    /// A target word for a new session, or `None` if the source is empty
    fn target_word(&self) -> Option<String>;

    /// Whether `candidate` is an accepted guess (case-insensitive)
    fn is_valid_word(&self, candidate: &str) -> bool;
}

/// In-memory dictionary of fixed-width words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Build from validated words, dropping duplicates
    #[must_use]
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.lookup.insert(word.text().to_string()) {
                list.words.push(word);
            }
        }
        list
    }

    /// The embedded dictionary, restricted to `word_length` letters
    #[must_use]
    pub fn embedded(word_length: usize) -> Self {
        Self::from_words(loader::words_from_slice(WORDS, word_length))
    }

    /// Load a dictionary file, restricted to `word_length` letters
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn load_from_file<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Self> {
        loader::load_from_file(path, word_length).map(Self::from_words)
    }

    /// Pick a random word using `rng`
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn target_word(&self) -> Option<String> {
        self.pick_with(&mut rand::rng())
            .map(|word| word.text().to_string())
    }

    fn is_valid_word(&self, candidate: &str) -> bool {
        self.lookup
            .contains(candidate.trim().to_ascii_uppercase().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::from_words(loader::words_from_slice(words, 5))
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_is_usable() {
        let words = WordList::embedded(5);
        assert_eq!(words.len(), WORDS_COUNT);
        assert!(words.is_valid_word("crane"));
        assert!(words.is_valid_word("ALLOW"));
        assert!(words.target_word().is_some());

        // No three-letter words in the embedded list
        assert!(WordList::embedded(3).is_empty());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let words = list(&["crane", "slate"]);
        assert!(words.is_valid_word("CRANE"));
        assert!(words.is_valid_word("sLaTe"));
        assert!(words.is_valid_word(" crane "));
        assert!(!words.is_valid_word("grant"));
    }

    #[test]
    fn duplicates_are_dropped() {
        let words = list(&["crane", "CRANE", "slate"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn empty_list_has_no_target() {
        let words = WordList::default();
        assert!(words.target_word().is_none());
        assert!(!words.is_valid_word("crane"));
    }

    #[test]
    fn seeded_pick_is_deterministic() {
        let words = list(&["crane", "slate", "grant", "llama"]);
        let first = words.pick_with(&mut StdRng::seed_from_u64(7)).cloned();
        let second = words.pick_with(&mut StdRng::seed_from_u64(7)).cloned();
        assert_eq!(first, second);
        assert!(first.is_some());
    }
}
