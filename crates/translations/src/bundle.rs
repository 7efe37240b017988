//! Per-locale string bundles.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;
use tracing::error;

use crate::locale::Locale;

const EN_BUNDLE: &str = include_str!("../locales/en.json");
const FA_BUNDLE: &str = include_str!("../locales/fa.json");
const ES_BUNDLE: &str = include_str!("../locales/es.json");

/// Errors raised while parsing a bundle.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("invalid {locale} bundle: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} bundle root must be an object")]
    NotAnObject(Locale),
}

/// Parsed bundles for every supported locale.
#[derive(Debug, Clone)]
pub struct Bundles {
    en: Value,
    fa: Value,
    es: Value,
}

static GLOBAL: OnceLock<Bundles> = OnceLock::new();

impl Bundles {
    /// Parse the bundles embedded in the crate.
    pub fn embedded() -> Result<Self, TranslationError> {
        Ok(Self {
            en: parse(Locale::En, EN_BUNDLE)?,
            fa: parse(Locale::Fa, FA_BUNDLE)?,
            es: parse(Locale::Es, ES_BUNDLE)?,
        })
    }

    /// Process-wide bundles, parsed on first use.
    ///
    /// A broken bundle is logged and replaced by an empty one, so every
    /// lookup falls back to its key path.
    pub fn global() -> &'static Bundles {
        GLOBAL.get_or_init(|| {
            Self::embedded().unwrap_or_else(|e| {
                error!("Failed to load translation bundles: {}", e);
                Self {
                    en: Value::Object(Default::default()),
                    fa: Value::Object(Default::default()),
                    es: Value::Object(Default::default()),
                }
            })
        })
    }

    fn root(&self, locale: Locale) -> &Value {
        match locale {
            Locale::En => &self.en,
            Locale::Fa => &self.fa,
            Locale::Es => &self.es,
        }
    }

    /// Resolve a key path, returning the path itself when it is missing.
    pub fn translate(&self, locale: Locale, key: &str) -> String {
        lookup(self.root(locale), key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Every leaf key path in a locale's bundle.
    pub fn keys(&self, locale: Locale) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        collect_keys(self.root(locale), String::new(), &mut keys);
        keys
    }
}

fn parse(locale: Locale, raw: &str) -> Result<Value, TranslationError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| TranslationError::Parse { locale, source })?;
    if !value.is_object() {
        return Err(TranslationError::NotAnObject(locale));
    }
    Ok(value)
}

fn collect_keys(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let path = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                collect_keys(v, path, out);
            }
        }
        _ => {
            out.insert(prefix);
        }
    }
}

/// Walk a dot-delimited path through a nested bundle.
///
/// Returns `None` if any segment is absent or the path ends on a
/// non-string node.
pub fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(root, |node, segment| node.get(segment))?
        .as_str()
}
