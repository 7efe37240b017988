//! The chat panel.

use std::sync::Arc;

use assistant_core::{now_millis, Assistant, ChatMessage, Role};
use tokio::sync::{broadcast, mpsc, oneshot, Mutex};
use tracing::{debug, info, warn};
use translations::{translate, Locale};

use crate::error::{SessionError, VoiceError};
use crate::event::{ChatState, SessionEvent};
use crate::voice::{RecognitionConfig, SpeechEvent, SpeechRecognizer};

const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct SessionState {
    history: Vec<ChatMessage>,
    input: String,
    state: ChatState,
    open: bool,
    listening: bool,
    /// Bumped on every capture start and stop so stale recognizer events
    /// are ignored.
    capture_generation: u64,
    /// Ends the event pump of the running capture.
    stop_capture: Option<oneshot::Sender<()>>,
    last_timestamp: i64,
}

impl SessionState {
    /// Append with a timestamp that never goes backwards.
    fn append(&mut self, role: Role, text: impl Into<String>) -> ChatMessage {
        let timestamp = now_millis().max(self.last_timestamp);
        self.last_timestamp = timestamp;
        let message = ChatMessage::new(role, text).at(timestamp);
        self.history.push(message.clone());
        message
    }

    fn merge_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }
        if self.input.trim().is_empty() {
            self.input = transcript.to_string();
        } else {
            self.input = format!("{} {}", self.input.trim_end(), transcript);
        }
    }
}

struct Inner {
    assistant: Arc<dyn Assistant>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    state: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

impl Inner {
    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    fn emit_appended(&self, message: ChatMessage) {
        self.emit(SessionEvent::MessageAppended(message));
        self.emit(SessionEvent::ScrollToLatest);
    }
}

/// Builder for [`ChatSession`].
pub struct ChatSessionBuilder {
    assistant: Arc<dyn Assistant>,
    recognizer: Option<Arc<dyn SpeechRecognizer>>,
    greeting: Option<String>,
}

impl ChatSessionBuilder {
    /// Use this recognizer for voice capture.
    pub fn recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    /// Show this message first. It is display-only and never forwarded.
    pub fn greeting(mut self, text: impl Into<String>) -> Self {
        self.greeting = Some(text.into());
        self
    }

    /// Use the localized greeting for `locale`.
    pub fn localized_greeting(self, locale: Locale) -> Self {
        self.greeting(translate(locale, "chat.greeting"))
    }

    /// Build the session.
    pub fn build(self) -> ChatSession {
        let mut state = SessionState::default();
        if let Some(greeting) = self.greeting {
            state.append(Role::Model, greeting);
        }
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        info!(
            "Chat session created with assistant: {}, voice: {}",
            self.assistant.name(),
            self.recognizer.is_some()
        );

        ChatSession {
            inner: Arc::new(Inner {
                assistant: self.assistant,
                recognizer: self.recognizer,
                state: Mutex::new(state),
                events,
            }),
        }
    }
}

/// A single shopper's conversation with the assistant.
///
/// Cloning yields another handle to the same session. History only grows:
/// each completed turn appends one `user` and one `model` message. While a
/// reply is pending further submissions are rejected.
#[derive(Clone)]
pub struct ChatSession {
    inner: Arc<Inner>,
}

impl ChatSession {
    /// Create a session with no greeting and no voice input.
    pub fn new(assistant: Arc<dyn Assistant>) -> Self {
        Self::builder(assistant).build()
    }

    /// Start building a session.
    pub fn builder(assistant: Arc<dyn Assistant>) -> ChatSessionBuilder {
        ChatSessionBuilder {
            assistant,
            recognizer: None,
            greeting: None,
        }
    }

    /// Receive future [`SessionEvent`]s.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the conversation, oldest first.
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.inner.state.lock().await.history.clone()
    }

    /// Current state.
    pub async fn state(&self) -> ChatState {
        self.inner.state.lock().await.state
    }

    /// Pending input text.
    pub async fn input(&self) -> String {
        self.inner.state.lock().await.input.clone()
    }

    /// Replace the pending input, as typing does.
    pub async fn set_input(&self, text: impl Into<String>) {
        self.inner.state.lock().await.input = text.into();
    }

    pub async fn is_open(&self) -> bool {
        self.inner.state.lock().await.open
    }

    /// Show the panel.
    pub async fn open(&self) {
        self.inner.state.lock().await.open = true;
        self.inner.emit(SessionEvent::ScrollToLatest);
    }

    /// Hide the panel. A pending reply is still appended when it arrives.
    pub async fn close(&self) {
        self.inner.state.lock().await.open = false;
    }

    pub async fn is_listening(&self) -> bool {
        self.inner.state.lock().await.listening
    }

    /// Submit the pending input.
    pub async fn send(&self) -> Result<ChatMessage, SessionError> {
        let text = self.input().await;
        self.submit(&text).await
    }

    /// Send one message and wait for the assistant's reply.
    ///
    /// Returns the appended `model` message. Gateway failures are not
    /// errors: the fallback text is appended instead. The turn runs on its
    /// own task, so dropping this future does not cancel it.
    pub async fn submit(&self, text: &str) -> Result<ChatMessage, SessionError> {
        let message = text.trim().to_string();

        let prior = {
            let mut state = self.inner.state.lock().await;
            if message.is_empty() {
                return Err(SessionError::EmptyMessage);
            }
            if state.state == ChatState::AwaitingReply {
                debug!("Rejected submission while awaiting a reply");
                return Err(SessionError::AwaitingReply);
            }

            let prior = state.history.clone();
            let user = state.append(Role::User, message.clone());
            state.input.clear();
            state.state = ChatState::AwaitingReply;
            self.inner.emit_appended(user);
            self.inner
                .emit(SessionEvent::StateChanged(ChatState::AwaitingReply));
            prior
        };

        let inner = Arc::clone(&self.inner);
        let turn = tokio::spawn(async move {
            let outcome = inner.assistant.respond(&prior, &message).await;
            if !outcome.is_reply() {
                warn!("Assistant turn fell back: {}", outcome);
            }
            let text = outcome.into_text(&inner.assistant.fallbacks());

            let mut state = inner.state.lock().await;
            let reply = state.append(Role::Model, text);
            state.state = ChatState::Idle;
            drop(state);

            inner.emit_appended(reply.clone());
            inner.emit(SessionEvent::StateChanged(ChatState::Idle));
            reply
        });

        match turn.await {
            Ok(reply) => {
                info!("Turn completed ({} chars)", reply.text.len());
                Ok(reply)
            }
            Err(e) => {
                let mut state = self.inner.state.lock().await;
                state.state = ChatState::Idle;
                drop(state);
                self.inner.emit(SessionEvent::StateChanged(ChatState::Idle));
                Err(SessionError::Aborted(e.to_string()))
            }
        }
    }

    /// Start voice capture, or stop it if already listening.
    ///
    /// Returns whether the session is listening afterwards. A finalized
    /// transcript is appended to the pending input and ends capture.
    pub async fn toggle_voice_capture(&self, locale: Locale) -> Result<bool, VoiceError> {
        let mut state = self.inner.state.lock().await;

        if state.listening {
            if let Some(recognizer) = &self.inner.recognizer {
                recognizer.stop();
            }
            state.listening = false;
            state.capture_generation += 1;
            if let Some(stop) = state.stop_capture.take() {
                let _ = stop.send(());
            }
            drop(state);
            self.inner.emit(SessionEvent::ListeningChanged(false));
            return Ok(false);
        }

        let Some(recognizer) = self.inner.recognizer.clone() else {
            drop(state);
            warn!("Voice capture requested but speech recognition is unavailable");
            self.inner
                .emit(SessionEvent::Notice(translate(locale, "chat.voice_unsupported")));
            return Err(VoiceError::Unsupported);
        };

        let (tx, rx) = mpsc::unbounded_channel();
        recognizer.start(RecognitionConfig::for_locale(locale), tx)?;

        let (stop_tx, stop_rx) = oneshot::channel();
        state.listening = true;
        state.capture_generation += 1;
        state.stop_capture = Some(stop_tx);
        let generation = state.capture_generation;
        drop(state);

        debug!("Voice capture started ({})", locale.speech_tag());
        self.inner.emit(SessionEvent::ListeningChanged(true));
        tokio::spawn(pump_speech(
            Arc::clone(&self.inner),
            recognizer,
            rx,
            stop_rx,
            generation,
        ));
        Ok(true)
    }
}

/// Wait for the event that ends one capture and apply it.
///
/// Exits without touching the session when capture is stopped first, even
/// if the recognizer keeps its end of the channel open.
async fn pump_speech(
    inner: Arc<Inner>,
    recognizer: Arc<dyn SpeechRecognizer>,
    mut rx: mpsc::UnboundedReceiver<SpeechEvent>,
    stop: oneshot::Receiver<()>,
    generation: u64,
) {
    let event = tokio::select! {
        event = rx.recv() => event,
        _ = stop => {
            debug!("Voice capture stopped before a result");
            return;
        }
    };

    let mut state = inner.state.lock().await;
    if state.capture_generation != generation {
        return;
    }
    state.stop_capture = None;

    match event {
        Some(SpeechEvent::Transcript(text)) => {
            state.merge_transcript(&text);
            recognizer.stop();
        }
        Some(SpeechEvent::Error(detail)) => {
            warn!("Speech recognition error: {}", detail);
        }
        Some(SpeechEvent::End) | None => {}
    }

    state.listening = false;
    state.capture_generation += 1;
    drop(state);
    inner.emit(SessionEvent::ListeningChanged(false));
}
