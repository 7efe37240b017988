//! Core trait and types for assistant gateways.
//!
//! This crate provides the shared interface between the chat session and
//! whatever answers it. It defines:
//!
//! - [`Assistant`] - The trait every gateway implements
//! - [`ChatMessage`] / [`Role`] - Conversation entries
//! - [`GatewayOutcome`] - Structured result of one gateway call
//! - [`FallbackMessages`] - Fixed texts substituted for failed calls
//! - [`AssistantError`] - Configuration and setup errors
//!
//! Gateways never fail a turn. They classify what happened into a
//! [`GatewayOutcome`], and [`Assistant::reply`] collapses that into the text
//! the user sees.
//!
//! # Example
//!
//! ```rust
//! use assistant_core::{async_trait, Assistant, ChatMessage, GatewayOutcome};
//!
//! struct Parrot;
//!
//! #[async_trait]
//! impl Assistant for Parrot {
//!     async fn respond(&self, _history: &[ChatMessage], message: &str) -> GatewayOutcome {
//!         GatewayOutcome::Reply(message.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Parrot"
//!     }
//! }
//! ```

mod error;
mod history;
mod message;
mod outcome;
mod prompt;
mod trait_def;

pub use error::AssistantError;
pub use history::{forwardable, window};
pub use message::{now_millis, ChatMessage, Role};
pub use outcome::{FallbackMessages, GatewayOutcome};
pub use prompt::hash_prompt;
pub use trait_def::Assistant;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
