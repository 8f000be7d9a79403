//! Per-letter feedback tags
//!
//! Tags are totally ordered `Absent < Present < Correct`, which is the
//! order the keyboard state uses when upgrading a letter.

use std::fmt;

/// Verdict for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tag {
    /// Letter not in the target (or all copies already accounted for)
    #[default]
    Absent,
    /// Letter in the target, different position
    Present,
    /// Letter in this exact position
    Correct,
}

impl Tag {
    /// Emoji square for this tag
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Render a sequence of tags as emoji squares
#[must_use]
pub fn tags_to_emoji(tags: &[Tag]) -> String {
    tags.iter().map(|t| t.to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_ordered() {
        assert!(Tag::Absent < Tag::Present);
        assert!(Tag::Present < Tag::Correct);
        assert_eq!(Tag::Absent.max(Tag::Correct), Tag::Correct);
        assert_eq!(Tag::default(), Tag::Absent);
    }

    #[test]
    fn emoji_rendering() {
        let tags = [Tag::Correct, Tag::Present, Tag::Absent];
        assert_eq!(tags_to_emoji(&tags), "🟩🟨⬜");
        assert_eq!(Tag::Present.to_string(), "present");
    }
}
