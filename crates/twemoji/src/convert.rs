//! Conversion between emoji text and Twemoji code point identifiers.

use crate::error::TwemojiError;
use crate::table::{VS16, ZWJ};

/// Separator placed between code points in an identifier.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Renders every scalar value of `text` as lowercase hexadecimal, joined by
/// `separator`.
///
/// ```
/// assert_eq!(twemoji::to_code_point("🇯🇵", "-"), "1f1ef-1f1f5");
/// ```
#[must_use]
pub fn to_code_point(text: &str, separator: &str) -> String {
    text.chars()
        .map(|ch| format!("{:x}", u32::from(ch)))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Parses a `-` separated hexadecimal identifier back into text.
///
/// # Errors
///
/// Returns [`TwemojiError::InvalidCodePoint`] when a segment is empty or not
/// hexadecimal, and [`TwemojiError::InvalidScalar`] when a segment names a
/// surrogate or a value above U+10FFFF.
pub fn from_code_point(code_point: &str) -> Result<String, TwemojiError> {
    code_point.split(DEFAULT_SEPARATOR).map(parse_segment).collect()
}

fn parse_segment(segment: &str) -> Result<char, TwemojiError> {
    if segment.is_empty() || !segment.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(TwemojiError::invalid_code_point(segment));
    }
    let value =
        u32::from_str_radix(segment, 16).map_err(|_| TwemojiError::invalid_code_point(segment))?;
    char::from_u32(value).ok_or_else(|| TwemojiError::invalid_scalar(value))
}

/// Derives the asset identifier for an emoji.
///
/// U+FE0F is dropped unless the sequence contains a zero-width joiner; the
/// Twemoji asset set keeps the selector only in ZWJ file names.
///
/// ```
/// assert_eq!(twemoji::icon_id("🧺"), "1f9fa");
/// assert_eq!(twemoji::icon_id("❤\u{fe0f}"), "2764");
/// ```
#[must_use]
pub fn icon_id(emoji: &str) -> String {
    if emoji.contains(ZWJ) {
        return to_code_point(emoji, DEFAULT_SEPARATOR);
    }
    let without_selector: String = emoji.chars().filter(|ch| *ch != VS16).collect();
    to_code_point(&without_selector, DEFAULT_SEPARATOR)
}
