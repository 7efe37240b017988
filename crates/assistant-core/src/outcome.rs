//! Structured gateway results and their user-facing fallbacks.

use std::fmt;

/// What happened during one gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayOutcome {
    /// The model produced text.
    Reply(String),
    /// No API credential was configured; no request was sent.
    MissingCredential,
    /// The request failed: transport error, timeout, non-2xx or bad body.
    NetworkError(String),
    /// The model answered with no usable text.
    EmptyCompletion,
}

impl GatewayOutcome {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayOutcome::Reply(_) => "reply",
            GatewayOutcome::MissingCredential => "missing_credential",
            GatewayOutcome::NetworkError(_) => "network_error",
            GatewayOutcome::EmptyCompletion => "empty_completion",
        }
    }

    /// Whether the model produced text.
    pub fn is_reply(&self) -> bool {
        matches!(self, GatewayOutcome::Reply(_))
    }

    /// Collapse into the text shown to the user.
    pub fn into_text(self, fallbacks: &FallbackMessages) -> String {
        match self {
            GatewayOutcome::Reply(text) => text,
            GatewayOutcome::MissingCredential => fallbacks.offline.clone(),
            GatewayOutcome::NetworkError(_) => fallbacks.network.clone(),
            GatewayOutcome::EmptyCompletion => fallbacks.empty.clone(),
        }
    }
}

impl fmt::Display for GatewayOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayOutcome::NetworkError(detail) => write!(f, "network_error: {}", detail),
            other => f.write_str(other.kind()),
        }
    }
}

/// Fixed texts substituted when the gateway cannot produce a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackMessages {
    /// Shown when no credential is configured.
    pub offline: String,
    /// Shown when the call fails.
    pub network: String,
    /// Shown when the completion is empty.
    pub empty: String,
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            offline: "I'm currently offline (API Key missing). Please browse our collection manually."
                .to_string(),
            network: "My needle skipped. Please try again later.".to_string(),
            empty: "I'm scratching the record... could you repeat that?".to_string(),
        }
    }
}
