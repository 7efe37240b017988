//! Recording assistant implementation - remembers every call.

use std::sync::Mutex;

use assistant_core::{async_trait, Assistant, ChatMessage, FallbackMessages, GatewayOutcome};

/// One call seen by a [`RecordingAssistant`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// History passed to the call.
    pub history: Vec<ChatMessage>,
    /// The new message.
    pub message: String,
}

/// Wraps another assistant and records each call's arguments.
pub struct RecordingAssistant<A: Assistant> {
    inner: A,
    calls: Mutex<Vec<RecordedCall>>,
}

impl<A: Assistant> RecordingAssistant<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or(0)
    }
}

#[async_trait]
impl<A: Assistant> Assistant for RecordingAssistant<A> {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> GatewayOutcome {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                history: history.to_vec(),
                message: message.to_string(),
            });
        }
        self.inner.respond(history, message).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn fallbacks(&self) -> FallbackMessages {
        self.inner.fallbacks()
    }
}
