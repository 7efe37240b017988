//! Google Gemini gateway for the Spin City vinyl assistant.
//!
//! This crate provides the single outbound call of the storefront: one
//! non-streamed `generateContent` request per user turn, carrying a fixed
//! system prompt with the full catalog embedded as inventory context.
//!
//! # Features
//!
//! - Persona, language mirroring and branding rules baked into the prompt
//! - Complete inventory listing so stock answers stay truthful
//! - Credential read at call time; a missing key answers with an offline
//!   notice instead of failing
//! - Every failure classified into a [`GatewayOutcome`] and collapsed to a
//!   fixed fallback text, with no retry
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use catalog::Catalog;
//! use gemini_assistant::{Assistant, GeminiAssistant};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = Catalog::builtin()?;
//!     let assistant = GeminiAssistant::from_env(&catalog)?;
//!     let text = assistant.reply(&[], "Do you have Kind of Blue?").await;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod api_types;
mod assistant;
mod config;
mod prompt;

pub use api_types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
pub use assistant::GeminiAssistant;
pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_KEY_VARS};
pub use prompt::{build_system_prompt, FOUNDER_NAME, STORE_NAME};

// Re-export assistant-core types for convenience
pub use assistant_core::{
    async_trait, Assistant, AssistantError, ChatMessage, FallbackMessages, GatewayOutcome, Role,
};
