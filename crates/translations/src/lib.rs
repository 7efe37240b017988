//! Localized strings for the storefront views.
//!
//! Strings live in one nested JSON bundle per locale and are addressed by a
//! dot-delimited key path such as `nav.shop`. A missing key resolves to the
//! key path itself so gaps in a bundle show up on screen instead of as blank
//! text.
//!
//! ```rust
//! use translations::{translate, Locale};
//!
//! assert_eq!(translate(Locale::En, "nav.shop"), "Shop");
//! assert_eq!(translate(Locale::En, "nav.nonexistent"), "nav.nonexistent");
//! ```

mod bundle;
mod locale;

pub use bundle::{lookup, Bundles, TranslationError};
pub use locale::{Direction, Locale, SUPPORTED_LOCALES};

/// Resolve `key` for `locale`, falling back to the key path.
pub fn translate(locale: Locale, key: &str) -> String {
    Bundles::global().translate(locale, key)
}

/// A lookup handle bound to one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    /// Create a translator for the given locale.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The bound locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolve a key path in the bound locale.
    pub fn t(&self, key: &str) -> String {
        translate(self.locale, key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}
