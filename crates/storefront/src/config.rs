//! Storefront settings from the environment.

use std::env;
use std::path::PathBuf;

use catalog::{Catalog, CatalogError};
use tracing::{info, warn};
use translations::Locale;

use crate::view::{Theme, ViewContext};

/// Settings for the storefront views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Interface language.
    pub locale: Locale,
    /// Terminal color scheme.
    pub theme: Theme,
    /// Catalog file replacing the embedded one.
    pub catalog_path: Option<PathBuf>,
}

impl StorefrontConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `SPIN_LANG` - Interface language: en, fa or es (default: en)
    /// - `SPIN_CATALOG_PATH` - Catalog JSON file (default: embedded catalog)
    pub fn from_env() -> Self {
        let locale = match env::var("SPIN_LANG") {
            Ok(value) => Locale::parse(&value).unwrap_or_else(|| {
                warn!("Unsupported SPIN_LANG '{}', using {}", value, Locale::default());
                Locale::default()
            }),
            Err(_) => Locale::default(),
        };

        let catalog_path = env::var("SPIN_CATALOG_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Self {
            locale,
            theme: Theme::default(),
            catalog_path,
        }
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        locale: Option<Locale>,
        theme: Option<Theme>,
        catalog_path: Option<PathBuf>,
    ) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if catalog_path.is_some() {
            self.catalog_path = catalog_path;
        }
        self
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.locale, self.theme)
    }

    /// Load the configured catalog.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        let catalog = match &self.catalog_path {
            Some(path) => Catalog::from_path(path)?,
            None => Catalog::builtin()?,
        };
        info!("Catalog loaded with {} products", catalog.len());
        Ok(catalog)
    }
}
