//! Error types for the storefront binary.

use catalog::CatalogError;
use gemini_assistant::AssistantError;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The catalog could not be loaded.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The assistant could not be configured.
    #[error("assistant error: {0}")]
    Assistant(#[from] AssistantError),

    /// No product has the requested id.
    #[error("no product with id '{0}'")]
    UnknownProduct(String),

    /// Reading the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
