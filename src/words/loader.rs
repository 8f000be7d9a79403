//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load words of `length` letters from a file
///
/// One word per line. Entries are trimmed and upper-cased; blank lines,
/// `#` comments and entries of the wrong length or with non-letters are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_session::words::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines(), length);

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert embedded string slice to Word vector, keeping `length`-letter words
///
/// # Examples
/// ```
/// use wordle_session::words::loader::words_from_slice;
///
/// let words = words_from_slice(&["crane", "cat", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), length)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, length: usize) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed, length).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "sl4te", "slate"];
        let words = words_from_slice(input, 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_other_length() {
        let words = words_from_slice(&["crane", "cat", "dog"], 3);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_trims_and_skips() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# comment").unwrap();
        writeln!(file, "  crane  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Slate\r").unwrap();
        writeln!(file, "nope").unwrap();

        let words = load_from_file(file.path(), 5).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("missing.txt"), 5).is_err());
    }
}
