//! Chat panel for the Spin City storefront.
//!
//! A [`ChatSession`] owns the conversation log, the pending input buffer and
//! the `Idle -> AwaitingReply -> Idle` state machine. It forwards each turn
//! to an [`Assistant`](assistant_core::Assistant) and appends whatever text
//! comes back, including fallback texts, so a turn never fails once
//! accepted.
//!
//! Voice input goes through the optional [`SpeechRecognizer`] capability.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chat_session::ChatSession;
//!
//! let session = ChatSession::builder(Arc::new(assistant))
//!     .localized_greeting(Locale::En)
//!     .build();
//! let reply = session.submit("Do you have Kind of Blue?").await?;
//! println!("{}", reply.text);
//! ```

mod error;
mod event;
mod session;
pub mod voice;

pub use error::{SessionError, VoiceError};
pub use event::{ChatState, SessionEvent};
pub use session::{ChatSession, ChatSessionBuilder};
pub use voice::{RecognitionConfig, SpeechEvent, SpeechRecognizer};

// Re-export for convenience
pub use assistant_core::{ChatMessage, Role};
