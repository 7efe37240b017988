//! Failing assistant implementation - never produces a reply.

use assistant_core::{async_trait, Assistant, ChatMessage, GatewayOutcome};

/// An assistant that always yields the same non-reply outcome.
#[derive(Debug, Clone)]
pub struct FailingAssistant {
    outcome: GatewayOutcome,
}

impl FailingAssistant {
    /// Behave as if no API key were configured.
    pub fn offline() -> Self {
        Self {
            outcome: GatewayOutcome::MissingCredential,
        }
    }

    /// Behave as if every request failed.
    pub fn network(detail: impl Into<String>) -> Self {
        Self {
            outcome: GatewayOutcome::NetworkError(detail.into()),
        }
    }

    /// Behave as if the model returned no text.
    pub fn empty() -> Self {
        Self {
            outcome: GatewayOutcome::EmptyCompletion,
        }
    }
}

#[async_trait]
impl Assistant for FailingAssistant {
    async fn respond(&self, _history: &[ChatMessage], _message: &str) -> GatewayOutcome {
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "FailingAssistant"
    }
}
