//! Speech recognition capability.
//!
//! A platform exposes speech input by implementing [`SpeechRecognizer`].
//! Sessions on platforms without it hold `None` and report
//! [`VoiceError::Unsupported`](crate::VoiceError::Unsupported).

use tokio::sync::mpsc::UnboundedSender;
use translations::Locale;

use crate::error::VoiceError;

/// Options for one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionConfig {
    /// BCP 47 tag, e.g. `fa-IR`.
    pub lang: String,
    /// Keep listening after the first result.
    pub continuous: bool,
    /// Deliver partial transcripts.
    pub interim_results: bool,
}

impl RecognitionConfig {
    /// Single-shot, final-results-only capture in the locale's language.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            lang: locale.speech_tag().to_string(),
            continuous: false,
            interim_results: false,
        }
    }
}

/// What a recognizer reports while capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// A finalized transcript.
    Transcript(String),
    /// Recognition failed.
    Error(String),
    /// The recognizer stopped on its own.
    End,
}

/// A platform speech recognizer.
pub trait SpeechRecognizer: Send + Sync {
    /// Begin capturing; events are delivered on `events` until capture ends.
    fn start(
        &self,
        config: RecognitionConfig,
        events: UnboundedSender<SpeechEvent>,
    ) -> Result<(), VoiceError>;

    /// Cancel the current capture. Calling it when idle does nothing.
    fn stop(&self);
}
