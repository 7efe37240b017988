//! The Assistant trait definition.

use async_trait::async_trait;

use crate::message::ChatMessage;
use crate::outcome::{FallbackMessages, GatewayOutcome};

/// A gateway that answers one user message given the prior conversation.
///
/// Implementations can range from scripted test doubles to hosted language
/// models. This trait is object-safe and can be used with
/// `Arc<dyn Assistant>`.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Answer `message` given every message that came before it.
    ///
    /// Never fails: problems are reported through the returned outcome.
    async fn respond(&self, history: &[ChatMessage], message: &str) -> GatewayOutcome;

    /// Get a human-readable name for this implementation.
    fn name(&self) -> &str;

    /// Texts used when [`respond`](Self::respond) does not produce a reply.
    fn fallbacks(&self) -> FallbackMessages {
        FallbackMessages::default()
    }

    /// Answer `message` and collapse the outcome into user-facing text.
    async fn reply(&self, history: &[ChatMessage], message: &str) -> String {
        let outcome = self.respond(history, message).await;
        outcome.into_text(&self.fallbacks())
    }
}
