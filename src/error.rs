//! Error type for the lower-level building blocks.
//!
//! Card validation itself never fails: every outcome is a `ValidationResult`.
//! `CardError` only covers misuse of the raw checksum and classifier
//! construction.

use std::fmt;

/// Errors raised by the checksum and classifier building blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// A character other than `0-9` reached the checksum.
    InvalidCharacter {
        /// Byte position in the checked string (0-indexed).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// A literal prefix set could not be compiled into a matcher.
    Pattern(String),

    /// A range prefix is malformed (`low > high` or zero width).
    InvalidRange { low: u32, high: u32, width: usize },
}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "invalid character '{}' at position {} (only digits allowed)",
                character.escape_default(),
                position
            ),
            Self::Pattern(msg) => write!(f, "failed to compile prefix set: {}", msg),
            Self::InvalidRange { low, high, width } => write!(
                f,
                "invalid prefix range {}..={} over {} digits",
                low, high, width
            ),
        }
    }
}

impl std::error::Error for CardError {}

impl From<aho_corasick::BuildError> for CardError {
    fn from(err: aho_corasick::BuildError) -> Self {
        Self::Pattern(err.to_string())
    }
}
