//! Scripted assistant implementation - plays back queued outcomes.

use std::collections::VecDeque;
use std::sync::Mutex;

use assistant_core::{async_trait, Assistant, ChatMessage, GatewayOutcome};

/// An assistant that returns pre-recorded outcomes in order.
///
/// Once the script runs out every call yields
/// [`GatewayOutcome::EmptyCompletion`].
#[derive(Debug, Default)]
pub struct ScriptedAssistant {
    script: Mutex<VecDeque<GatewayOutcome>>,
}

impl ScriptedAssistant {
    /// Create an assistant that plays back `outcomes`.
    pub fn new(outcomes: impl IntoIterator<Item = GatewayOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    /// Create an assistant that replies with each text in turn.
    pub fn replies<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|t| GatewayOutcome::Reply(t.into())))
    }

    /// Queue another outcome.
    pub fn push(&self, outcome: GatewayOutcome) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(outcome);
        }
    }

    /// Outcomes not yet played.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Assistant for ScriptedAssistant {
    async fn respond(&self, _history: &[ChatMessage], _message: &str) -> GatewayOutcome {
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(GatewayOutcome::EmptyCompletion)
    }

    fn name(&self) -> &str {
        "ScriptedAssistant"
    }
}
