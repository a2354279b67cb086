//! Lookup table of known emoji sequences.
//!
//! The table is a code point trie built once from the `emojis` catalogue and
//! shared read-only by every matcher. Only entries the Twemoji 13 asset set
//! covers are kept. Each one is registered with all of its skin-tone
//! variants, and again with U+FE0F removed so that text which omits the
//! presentation selector still matches. Symbols that are ordinary text
//! without the selector, such as `©`, are only registered with it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

/// Zero-width joiner used to glue ZWJ sequences together.
pub(crate) const ZWJ: char = '\u{200D}';
/// Variation selector-16, requesting emoji presentation.
pub(crate) const VS16: char = '\u{FE0F}';
/// Variation selector-15, requesting text presentation.
pub(crate) const VS15: char = '\u{FE0E}';
/// Combining enclosing keycap.
const KEYCAP: char = '\u{20E3}';

/// Newest Unicode emoji release with assets under the pinned CDN version.
const NEWEST_SUPPORTED: emojis::UnicodeVersion = emojis::UnicodeVersion::new(13, 0);

/// Symbols that only count as emoji when followed by U+FE0F.
const SELECTOR_REQUIRED: [char; 4] = ['\u{A9}', '\u{AE}', '\u{2122}', '\u{265F}'];

static TABLE: Lazy<EmojiTable> = Lazy::new(EmojiTable::from_catalogue);

/// Returns the process-wide emoji table, building it on first use.
pub(crate) fn table() -> &'static EmojiTable {
    &TABLE
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, usize>,
    terminal: bool,
}

/// Trie of emoji code point sequences.
#[derive(Debug)]
pub(crate) struct EmojiTable {
    nodes: Vec<Node>,
    sequences: usize,
}

impl EmojiTable {
    /// Creates an empty table holding only the root node.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            sequences: 0,
        }
    }

    fn from_catalogue() -> Self {
        let mut table = Self::new();
        let supported = emojis::iter()
            .flat_map(|emoji| {
                std::iter::once(emoji).chain(emoji.skin_tones().into_iter().flatten())
            })
            .filter(|emoji| emoji.unicode_version() <= NEWEST_SUPPORTED);
        for emoji in supported {
            table.insert_with_bare_form(emoji.as_str());
        }
        debug!(sequences = table.sequences, "emoji table built");
        table
    }

    /// Registers `sequence` and, unless it is a symbol that needs the
    /// selector, its form without U+FE0F.
    pub(crate) fn insert_with_bare_form(&mut self, sequence: &str) {
        self.insert(sequence);
        if !sequence.contains(VS16) {
            return;
        }
        let bare: String = sequence.chars().filter(|ch| *ch != VS16).collect();
        if !is_selector_required(&bare) {
            self.insert(&bare);
        }
    }

    /// Registers a single sequence.
    ///
    /// Returns `false` when the sequence was already present or starts with a
    /// component code point, which can never begin an emoji on its own.
    pub(crate) fn insert(&mut self, sequence: &str) -> bool {
        if sequence.chars().next().is_none_or(is_component) {
            return false;
        }

        let mut node = 0;
        for ch in sequence.chars() {
            node = self.child_or_insert(node, ch);
        }

        let Some(entry) = self.nodes.get_mut(node) else {
            return false;
        };
        if entry.terminal {
            return false;
        }
        entry.terminal = true;
        self.sequences = self.sequences.saturating_add(1);
        true
    }

    fn child_or_insert(&mut self, node: usize, ch: char) -> usize {
        if let Some(next) = self.child(node, ch) {
            return next;
        }
        let next = self.nodes.len();
        self.nodes.push(Node::default());
        if let Some(parent) = self.nodes.get_mut(node) {
            parent.children.insert(ch, next);
        }
        next
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes
            .get(node)
            .and_then(|entry| entry.children.get(&ch))
            .copied()
    }

    /// Returns the byte length of the longest registered sequence that
    /// prefixes `text`.
    pub(crate) fn longest_prefix(&self, text: &str) -> Option<usize> {
        let mut node = 0;
        let mut longest = None;
        for (offset, ch) in text.char_indices() {
            let Some(next) = self.child(node, ch) else {
                break;
            };
            node = next;
            if self.nodes.get(node).is_some_and(|entry| entry.terminal) {
                longest = Some(offset + ch.len_utf8());
            }
        }
        longest
    }

    /// Returns whether `sequence` is exactly one registered sequence.
    pub(crate) fn contains(&self, sequence: &str) -> bool {
        !sequence.is_empty() && self.longest_prefix(sequence) == Some(sequence.len())
    }

    /// Number of registered sequences.
    pub(crate) const fn len(&self) -> usize {
        self.sequences
    }
}

fn is_selector_required(bare: &str) -> bool {
    let mut chars = bare.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(ch), None) if SELECTOR_REQUIRED.contains(&ch)
    )
}

/// Code points that only ever modify or join a preceding emoji.
pub(crate) const fn is_component(ch: char) -> bool {
    matches!(ch, '\u{1F3FB}'..='\u{1F3FF}' | ZWJ | VS16 | VS15 | KEYCAP)
}
