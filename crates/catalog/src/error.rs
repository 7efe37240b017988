//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same identifier.
    #[error("duplicate product id: {0}")]
    DuplicateId(String),

    /// A product failed validation.
    #[error("invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },
}
