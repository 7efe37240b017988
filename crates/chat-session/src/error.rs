//! Error types for the chat panel.

use thiserror::Error;

/// Why a submission was refused. History is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The message was empty after trimming.
    #[error("message is empty")]
    EmptyMessage,

    /// A reply is still pending; the submission is dropped, not queued.
    #[error("still waiting for the previous reply")]
    AwaitingReply,

    /// The task running the turn stopped before appending a reply.
    #[error("turn aborted: {0}")]
    Aborted(String),
}

/// Why voice capture could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VoiceError {
    /// No speech recognizer is available on this platform.
    #[error("speech recognition is not supported")]
    Unsupported,

    /// The recognizer refused to start.
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}
