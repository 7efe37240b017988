//! Echo assistant implementation - replies with the message it was sent.

use assistant_core::{async_trait, Assistant, ChatMessage, GatewayOutcome};

/// A simple assistant that echoes each message back.
///
/// Useful for testing the chat flow without any model.
#[derive(Debug, Clone, Default)]
pub struct EchoAssistant {
    /// Optional prefix to add before the echo.
    prefix: Option<String>,
}

impl EchoAssistant {
    /// Create a new EchoAssistant with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new EchoAssistant with a custom prefix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mock_assistant::EchoAssistant;
    ///
    /// let assistant = EchoAssistant::with_prefix("Echo: ");
    /// // Will reply with "Echo: <original message>"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Assistant for EchoAssistant {
    async fn respond(&self, _history: &[ChatMessage], message: &str) -> GatewayOutcome {
        let text = match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, message),
            None => message.to_string(),
        };
        GatewayOutcome::Reply(text)
    }

    fn name(&self) -> &str {
        "EchoAssistant"
    }
}
