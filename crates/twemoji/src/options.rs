//! Per-call configuration for the replacement pipeline.
//!
//! [`Options`] carries everything that shapes the generated markup. Callers
//! either build one directly or hand a configurator closure to
//! [`Options::resolve`], which mutates a fresh default copy before the value
//! is fixed for the call.

use std::fmt;
use std::sync::Arc;

/// Default CDN base, pinned to the Twemoji 13.0.1 release.
pub const DEFAULT_BASE: &str = "https://twemoji.maxcdn.com/v/13.0.1/";
/// Default image file extension.
pub const DEFAULT_EXT: &str = ".png";
/// Default size folder under the base.
pub const DEFAULT_SIZE: &str = "72x72";
/// Default `class` attribute of generated images.
pub const DEFAULT_CLASS_NAME: &str = "emoji";

/// Builds the `src` value for an emoji from its identifier and the options.
pub type SourceGenerator = Arc<dyn Fn(&str, &Options) -> String + Send + Sync>;

/// Options applied to a single parse call.
///
/// # Defaults
///
/// - `class_name`: `"emoji"`
/// - `draggable`: `false`
/// - `base`: [`DEFAULT_BASE`]
/// - `size`: `"72x72"`
/// - `ext`: `".png"`
/// - `source_generator`: [`default_source_generator`]
///
/// # Example
///
/// ```
/// use twemoji::Options;
///
/// let options = Options::resolve(|options| {
///     options.size = "svg".to_owned();
///     options.ext = ".svg".to_owned();
/// });
/// assert_eq!(
///     options.generate_source("1f9fa"),
///     "https://twemoji.maxcdn.com/v/13.0.1/svg/1f9fa.svg"
/// );
/// ```
#[derive(Clone)]
pub struct Options {
    /// Value of the `class` attribute.
    pub class_name: String,
    /// Kept for parity with Twemoji's option set. Generated markup always
    /// carries `draggable="false"` whatever this holds.
    pub draggable: bool,
    /// Base URL or path that assets live under.
    pub base: String,
    /// File extension appended to the identifier, including the dot.
    pub ext: String,
    /// Size folder placed between the base and the identifier.
    pub size: String,
    /// Function that turns an identifier into the `src` value.
    pub source_generator: SourceGenerator,
}

impl Options {
    /// Returns the default options after applying `configure` to them.
    #[must_use]
    pub fn resolve(configure: impl FnOnce(&mut Self)) -> Self {
        let mut options = Self::default();
        configure(&mut options);
        options
    }

    /// Replaces the source generator.
    pub fn set_source_generator<F>(&mut self, generator: F)
    where
        F: Fn(&str, &Self) -> String + Send + Sync + 'static,
    {
        self.source_generator = Arc::new(generator);
    }

    /// Sets the class name.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets the base URL or path.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Sets the file extension.
    #[must_use]
    pub fn with_ext(mut self, ext: impl Into<String>) -> Self {
        self.ext = ext.into();
        self
    }

    /// Sets the size folder.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the source generator.
    #[must_use]
    pub fn with_source_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&str, &Self) -> String + Send + Sync + 'static,
    {
        self.set_source_generator(generator);
        self
    }

    /// Runs the source generator for `icon_id`.
    #[must_use]
    pub fn generate_source(&self, icon_id: &str) -> String {
        (self.source_generator)(icon_id, self)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            class_name: DEFAULT_CLASS_NAME.to_owned(),
            draggable: false,
            base: DEFAULT_BASE.to_owned(),
            ext: DEFAULT_EXT.to_owned(),
            size: DEFAULT_SIZE.to_owned(),
            source_generator: Arc::new(default_source_generator),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("class_name", &self.class_name)
            .field("draggable", &self.draggable)
            .field("base", &self.base)
            .field("ext", &self.ext)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Composes `base + size + "/" + icon_id + ext`.
#[must_use]
pub fn default_source_generator(icon_id: &str, options: &Options) -> String {
    format!(
        "{}{}/{}{}",
        options.base, options.size, icon_id, options.ext
    )
}
