//! Replacement pipeline turning matched emoji into markup or records.
//!
//! Each match is converted to its identifier, handed to the configured
//! source generator, and then either substituted into the text as an `<img>`
//! tag or collected as an [`EmojiImage`].

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::matcher::{EmojiMatch, find_emojis};
use crate::options::Options;

/// An emoji found in the input together with its generated source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmojiImage {
    /// The emoji exactly as it appeared in the input.
    pub emoji: String,
    /// The value produced by the source generator.
    pub src: String,
}

impl EmojiImage {
    /// Creates a record from an emoji and its source.
    #[must_use]
    pub fn new(emoji: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            src: src.into(),
        }
    }
}

/// Emoji parser bound to a fixed set of [`Options`].
///
/// # Example
///
/// ```
/// use twemoji::Twemoji;
///
/// let twemoji = Twemoji::configured(|options| options.class_name = "icon".to_owned());
/// let html = twemoji.parse("hi 🧺");
/// assert!(html.starts_with("hi <img class=\"icon\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Twemoji {
    options: Options,
}

impl Twemoji {
    /// Creates a parser using `options`.
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Creates a parser from the defaults adjusted by `configure`.
    #[must_use]
    pub fn configured(configure: impl FnOnce(&mut Options)) -> Self {
        Self::new(Options::resolve(configure))
    }

    /// Returns the options this parser renders with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces every emoji in `text` with an `<img>` tag.
    ///
    /// An emoji whose generated source is empty stays as text. When nothing
    /// is replaced the input is returned borrowed and unchanged.
    #[must_use]
    pub fn parse<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut output: Option<String> = None;
        let mut copied_up_to = 0;
        for emoji in find_emojis(text) {
            let Some(src) = self.source_for(&emoji) else {
                continue;
            };
            let out = output.get_or_insert_with(|| String::with_capacity(text.len() + 128));
            out.push_str(text.get(copied_up_to..emoji.start()).unwrap_or_default());
            push_img(out, &self.options.class_name, emoji.as_str(), &src);
            copied_up_to = emoji.end();
        }

        match output {
            Some(mut out) => {
                out.push_str(text.get(copied_up_to..).unwrap_or_default());
                Cow::Owned(out)
            }
            None => Cow::Borrowed(text),
        }
    }

    /// Lists every emoji in `text` with its generated source, in order.
    ///
    /// Emoji whose generated source is empty are left out.
    #[must_use]
    pub fn parse_to_list(&self, text: &str) -> Vec<EmojiImage> {
        find_emojis(text)
            .filter_map(|emoji| {
                self.source_for(&emoji)
                    .map(|src| EmojiImage::new(emoji.as_str(), src))
            })
            .collect()
    }

    fn source_for(&self, emoji: &EmojiMatch<'_>) -> Option<String> {
        let icon = emoji.icon_id();
        let src = self.options.generate_source(&icon);
        if src.is_empty() {
            trace!(emoji = emoji.as_str(), icon = %icon, "empty source, emoji kept as text");
            return None;
        }
        trace!(
            emoji = emoji.as_str(),
            icon = %icon,
            offset = emoji.start(),
            "emoji replaced"
        );
        Some(src)
    }
}

fn push_img(output: &mut String, class_name: &str, alt: &str, src: &str) {
    output.push_str(r#"<img class=""#);
    output.push_str(class_name);
    output.push_str(r#"" draggable="false" alt=""#);
    output.push_str(alt);
    output.push_str(r#"" src=""#);
    output.push_str(src);
    output.push_str(r#""/>"#);
}

/// Replaces every emoji in `text` using the default options.
///
/// ```
/// assert_eq!(
///     twemoji::parse("🧺"),
///     "<img class=\"emoji\" draggable=\"false\" alt=\"🧺\" \
///      src=\"https://twemoji.maxcdn.com/v/13.0.1/72x72/1f9fa.png\"/>"
/// );
/// ```
#[must_use]
pub fn parse(text: &str) -> Cow<'_, str> {
    Twemoji::default().parse(text)
}

/// Replaces every emoji in `text` using the defaults adjusted by
/// `configure`.
#[must_use]
pub fn parse_with(text: &str, configure: impl FnOnce(&mut Options)) -> Cow<'_, str> {
    Twemoji::configured(configure).parse(text)
}

/// Lists every emoji in `text` using the default options.
#[must_use]
pub fn parse_to_list(text: &str) -> Vec<EmojiImage> {
    Twemoji::default().parse_to_list(text)
}

/// Lists every emoji in `text` using the defaults adjusted by `configure`.
#[must_use]
pub fn parse_to_list_with(text: &str, configure: impl FnOnce(&mut Options)) -> Vec<EmojiImage> {
    Twemoji::configured(configure).parse_to_list(text)
}
