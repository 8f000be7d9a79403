//! Word representation
//!
//! A Word stores a fixed-width word of ASCII letters, normalised to upper case.

use crate::error::WordError;
use rustc_hash::FxHashMap;
use std::fmt;

/// Default number of letters in a word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A validated, upper-case word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_session::core::Word;
    ///
    /// let word = Word::new("crane", 5).unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long", 5).is_err());
    /// assert!(Word::new("sh0rt", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let letters: Vec<char> = text.trim().chars().collect();

        if letters.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: letters.len(),
            });
        }

        if !letters.iter().all(char::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let letters: Vec<char> = letters.iter().map(char::to_ascii_uppercase).collect();

        Ok(Self {
            text: letters.iter().collect(),
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters of the word
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Case-insensitive comparison against raw letters
    #[must_use]
    pub fn matches(&self, letters: &[char]) -> bool {
        self.letters.len() == letters.len()
            && self
                .letters
                .iter()
                .zip(letters)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

/// Multiset of letters, used for duplicate handling
pub(crate) fn letter_counts(letters: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "CRANE");
        assert_eq!(word.letters(), &['C', 'R', 'A', 'N', 'E']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_trims_and_uppercases() {
        let word = Word::new("  CrAnE \n", 5).unwrap();
        assert_eq!(word.text(), "CRANE");
    }

    #[test]
    fn word_creation_other_widths() {
        assert_eq!(Word::new("cat", 3).unwrap().text(), "CAT");
        assert_eq!(Word::new("planets", 7).unwrap().len(), 7);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            Word::new("", 5),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr ne", 5), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cráne", 5), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_matches_ignores_case() {
        let word = Word::new("slate", 5).unwrap();
        assert!(word.matches(&['s', 'L', 'a', 'T', 'e']));
        assert!(!word.matches(&['S', 'L', 'A', 'T']));
        assert!(!word.matches(&['C', 'R', 'A', 'N', 'E']));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed", 5).unwrap();
        let counts = letter_counts(word.letters());
        assert_eq!(counts.get(&'S'), Some(&1));
        assert_eq!(counts.get(&'E'), Some(&2));
        assert_eq!(counts.get(&'Z'), None);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
