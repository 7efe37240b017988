//! Supported locales.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported storefront locale.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Farsi.
    Fa,
    /// Spanish.
    Es,
}

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Locales in selector order.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Fa, Locale::Es];

impl Locale {
    /// Language code, e.g. `fa`.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fa => "fa",
            Locale::Es => "es",
        }
    }

    /// Parse a language code, ignoring case and any region suffix.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "fa" => Some(Locale::Fa),
            "es" => Some(Locale::Es),
            _ => None,
        }
    }

    /// Writing direction.
    pub const fn direction(self) -> Direction {
        match self {
            Locale::Fa => Direction::Rtl,
            Locale::En | Locale::Es => Direction::Ltr,
        }
    }

    /// Regional tag handed to speech recognition.
    pub const fn speech_tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Fa => "fa-IR",
            Locale::Es => "es-ES",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| format!("unsupported locale: {}", s))
    }
}
