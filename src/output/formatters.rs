//! Formatting utilities for terminal output

use crate::core::{GuessRow, Tag};
use colored::{ColoredString, Colorize};
use std::time::Duration;

/// Format a duration as `mm:ss`, or `h:mm:ss` past an hour
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Colour one letter by its tag
#[must_use]
pub fn colored_letter(letter: char, tag: Tag) -> ColoredString {
    let cell = format!(" {letter} ");
    match tag {
        Tag::Correct => cell.black().on_green().bold(),
        Tag::Present => cell.black().on_yellow().bold(),
        Tag::Absent => cell.white().on_bright_black(),
    }
}

/// Render an evaluated row as coloured letter cells
#[must_use]
pub fn colored_row(row: &GuessRow) -> String {
    row.cells()
        .iter()
        .map(|&(letter, tag)| colored_letter(letter, tag).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_under_an_hour() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
    }

    #[test]
    fn elapsed_over_an_hour() {
        assert_eq!(format_elapsed(Duration::from_secs(3_725)), "1:02:05");
    }

    #[test]
    fn colored_row_contains_letters() {
        colored::control::set_override(false);
        let guess: Vec<char> = "CRANE".chars().collect();
        let target: Vec<char> = "SLATE".chars().collect();
        let row = GuessRow::evaluate(&guess, &target).unwrap();
        assert_eq!(colored_row(&row), " C  R  A  N  E ");
    }
}
