//! Twemoji markup for Unicode emoji.
//!
//! This crate finds emoji sequences in arbitrary text and either replaces
//! them with `<img>` tags pointing at the Twemoji CDN or lists them with the
//! image source each one maps to.
//!
//! - **Matching** via [`find_emojis`], a lazy greedy scan that keeps compound
//!   sequences (flags, keycaps, skin tones, ZWJ sequences) together
//! - **Replacement** via [`parse`] / [`Twemoji::parse`], which substitutes
//!   every match with markup
//! - **Listing** via [`parse_to_list`] / [`Twemoji::parse_to_list`], which
//!   leaves the text alone and returns [`EmojiImage`] records
//! - **Identifiers** via [`icon_id`], [`to_code_point`], and
//!   [`from_code_point`]
//!
//! # Markup
//!
//! Every match becomes
//! `<img class="{class_name}" draggable="false" alt="{emoji}" src="{src}"/>`
//! where `src` comes from the configured [`SourceGenerator`]. By default it
//! reads `https://twemoji.maxcdn.com/v/13.0.1/72x72/{id}.png`.
//!
//! # Example: Custom Options
//!
//! ```
//! let html = twemoji::parse_with("🧺", |options| {
//!     options.class_name = "testClassName".to_owned();
//!     options.base = "test/".to_owned();
//!     options.size = "1000x1000".to_owned();
//!     options.set_source_generator(|icon, options| {
//!         format!("{}_tag_{}_{icon}{}", options.base, options.size, options.ext)
//!     });
//! });
//!
//! assert_eq!(
//!     html,
//!     r#"<img class="testClassName" draggable="false" alt="🧺" src="test/_tag_1000x1000_1f9fa.png"/>"#
//! );
//! ```
//!
//! # Example: Listing
//!
//! ```
//! let images = twemoji::parse_to_list("123🧺32a🧺");
//! assert_eq!(images.len(), 2);
//! assert_eq!(images[0].src, "https://twemoji.maxcdn.com/v/13.0.1/72x72/1f9fa.png");
//! ```

mod convert;
mod error;
mod matcher;
mod options;
mod parser;
mod table;

pub use convert::{DEFAULT_SEPARATOR, from_code_point, icon_id, to_code_point};
pub use error::TwemojiError;
pub use matcher::{
    EmojiMatch, EmojiMatches, contains_emoji, find_emojis, is_emoji, known_sequences,
};
pub use options::{
    DEFAULT_BASE, DEFAULT_CLASS_NAME, DEFAULT_EXT, DEFAULT_SIZE, Options, SourceGenerator,
    default_source_generator,
};
pub use parser::{EmojiImage, Twemoji, parse, parse_to_list, parse_to_list_with, parse_with};

#[cfg(test)]
mod tests;
