//! Error types for assistant setup.

use thiserror::Error;

/// Errors that can occur while building an assistant.
///
/// Per-turn failures are not errors; they are reported as a
/// [`GatewayOutcome`](crate::GatewayOutcome).
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Invalid or incomplete configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The HTTP client could not be created.
    #[error("client setup failed: {0}")]
    Client(String),
}
