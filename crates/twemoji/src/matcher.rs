//! Emoji matching over arbitrary text.
//!
//! The matcher walks the input one scalar value at a time and, at each
//! position, takes the longest sequence known to the emoji table. Matches are
//! produced lazily, in order, and never overlap.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::convert::icon_id;
use crate::table::{EmojiTable, VS15, table};

/// A single emoji located in the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> EmojiMatch<'a> {
    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the length of the match in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns whether the match is empty. Matches produced by
    /// [`EmojiMatches`] never are.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the byte range of the match in the source.
    #[must_use]
    pub const fn byte_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the matched emoji text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.source.get(self.byte_range()).unwrap_or_default()
    }

    /// Returns the Twemoji identifier for the matched emoji.
    #[must_use]
    pub fn icon_id(&self) -> String {
        icon_id(self.as_str())
    }
}

/// Lazy iterator over the emoji in a string.
///
/// Created by [`find_emojis`].
#[derive(Debug, Clone)]
pub struct EmojiMatches<'a> {
    source: &'a str,
    position: usize,
    table: &'static EmojiTable,
}

impl<'a> Iterator for EmojiMatches<'a> {
    type Item = EmojiMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(rest) = self.source.get(self.position..) {
            let first = rest.chars().next()?;
            let Some(length) = self.table.longest_prefix(rest) else {
                self.position += first.len_utf8();
                continue;
            };

            let start = self.position;
            let end = start + length;
            // A trailing text-presentation selector opts the emoji out.
            if rest.get(length..).and_then(|tail| tail.chars().next()) == Some(VS15) {
                self.position = end + VS15.len_utf8();
                continue;
            }

            self.position = end;
            return Some(EmojiMatch {
                source: self.source,
                start,
                end,
            });
        }
        None
    }
}

impl FusedIterator for EmojiMatches<'_> {}

/// Finds every emoji in `text`, left to right.
///
/// # Example
///
/// ```
/// let found: Vec<_> = twemoji::find_emojis("a 🧺 b 🇯🇵")
///     .map(|m| m.as_str())
///     .collect();
/// assert_eq!(found, ["🧺", "🇯🇵"]);
/// ```
#[must_use]
pub fn find_emojis(text: &str) -> EmojiMatches<'_> {
    EmojiMatches {
        source: text,
        position: 0,
        table: table(),
    }
}

/// Returns whether `text` contains at least one emoji.
#[must_use]
pub fn contains_emoji(text: &str) -> bool {
    find_emojis(text).next().is_some()
}

/// Returns whether `text` is exactly one known emoji sequence.
#[must_use]
pub fn is_emoji(text: &str) -> bool {
    table().contains(text)
}

/// Returns how many emoji sequences the lookup table knows.
#[must_use]
pub fn known_sequences() -> usize {
    table().len()
}
