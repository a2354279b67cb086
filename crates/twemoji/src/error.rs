//! Error types for the code point conversion helpers.
//!
//! Matching and replacement never fail; only converting an identifier back
//! into text can reject its input.

use thiserror::Error;

/// Errors from converting Twemoji identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TwemojiError {
    /// A segment of the identifier is not a hexadecimal number.
    #[error("invalid code point segment: {segment:?}")]
    InvalidCodePoint {
        /// The segment that failed to parse.
        segment: String,
    },

    /// A segment parsed but does not name a Unicode scalar value.
    #[error("U+{value:X} is not a Unicode scalar value")]
    InvalidScalar {
        /// The parsed numeric value.
        value: u32,
    },
}

impl TwemojiError {
    /// Creates an invalid code point error.
    #[must_use]
    pub fn invalid_code_point(segment: impl Into<String>) -> Self {
        Self::InvalidCodePoint {
            segment: segment.into(),
        }
    }

    /// Creates an invalid scalar error.
    #[must_use]
    pub const fn invalid_scalar(value: u32) -> Self {
        Self::InvalidScalar { value }
    }
}
