//! Observer notifications.

use assistant_core::ChatMessage;

/// Whether the panel is waiting on the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    #[default]
    Idle,
    AwaitingReply,
}

/// Something observers of a session may want to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A message was appended to the history.
    MessageAppended(ChatMessage),
    /// The view should scroll to the newest message.
    ScrollToLatest,
    /// The session moved between idle and awaiting a reply.
    StateChanged(ChatState),
    /// Voice capture started or stopped.
    ListeningChanged(bool),
    /// A short user-facing notice, e.g. unsupported voice input.
    Notice(String),
}
