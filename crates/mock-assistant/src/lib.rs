//! Mock assistant implementations for chat panel tests.
//!
//! This crate provides test doubles for the `Assistant` trait:
//! - `EchoAssistant` - Replies with the message it was sent
//! - `ScriptedAssistant` - Plays back a queue of outcomes
//! - `FailingAssistant` - Always produces the same fallback outcome
//! - `GatedAssistant` - Holds every call until released
//! - `RecordingAssistant` - Wraps another assistant and records each call
//!
//! For real completions, use the `gemini-assistant` crate instead.
//!
//! # Example
//!
//! ```rust
//! use mock_assistant::{Assistant, EchoAssistant};
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = EchoAssistant::new();
//!     let text = assistant.reply(&[], "Hello!").await;
//!     assert_eq!(text, "Hello!");
//! }
//! ```
//!
//! # Features
//!
//! - `speech`: Enable `ScriptedRecognizer`, a speech recognizer double for
//!   chat-session voice capture tests.

mod echo;
mod failing;
mod gated;
mod recording;
mod scripted;

#[cfg(feature = "speech")]
pub mod speech;

// Re-export assistant-core types for convenience
pub use assistant_core::{
    async_trait, Assistant, ChatMessage, FallbackMessages, GatewayOutcome, Role,
};

pub use echo::EchoAssistant;
pub use failing::FailingAssistant;
pub use gated::GatedAssistant;
pub use recording::{RecordedCall, RecordingAssistant};
pub use scripted::ScriptedAssistant;

#[cfg(feature = "speech")]
pub use speech::ScriptedRecognizer;
