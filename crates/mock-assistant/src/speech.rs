//! Scripted speech recognizer for voice capture tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chat_session::{RecognitionConfig, SpeechEvent, SpeechRecognizer, VoiceError};
use tokio::sync::mpsc::UnboundedSender;

/// A recognizer driven by the test.
///
/// Events queued with [`on_start`](Self::on_start) are delivered as soon as
/// capture starts; [`emit`](Self::emit) delivers one later. `stop` drops the
/// event channel like a real recognizer ending its capture.
#[derive(Debug, Default)]
pub struct ScriptedRecognizer {
    on_start: Mutex<Vec<SpeechEvent>>,
    sender: Mutex<Option<UnboundedSender<SpeechEvent>>>,
    last_config: Mutex<Option<RecognitionConfig>>,
    fail_start: Option<String>,
    starts: AtomicUsize,
    stops: AtomicUsize,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A recognizer that refuses to start.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_start: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Deliver `events` on every start.
    pub fn on_start(self, events: impl IntoIterator<Item = SpeechEvent>) -> Self {
        if let Ok(mut queued) = self.on_start.lock() {
            queued.extend(events);
        }
        self
    }

    /// Deliver an event to the active capture. Returns false when idle.
    pub fn emit(&self, event: SpeechEvent) -> bool {
        self.sender
            .lock()
            .ok()
            .and_then(|sender| sender.as_ref().map(|tx| tx.send(event).is_ok()))
            .unwrap_or(false)
    }

    /// Config passed to the most recent start.
    pub fn last_config(&self) -> Option<RecognitionConfig> {
        self.last_config.lock().ok().and_then(|c| c.clone())
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stops(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(
        &self,
        config: RecognitionConfig,
        events: UnboundedSender<SpeechEvent>,
    ) -> Result<(), VoiceError> {
        if let Some(reason) = &self.fail_start {
            return Err(VoiceError::Start(reason.clone()));
        }

        self.starts.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_config.lock() {
            *last = Some(config);
        }
        if let Ok(queued) = self.on_start.lock() {
            for event in queued.iter() {
                let _ = events.send(event.clone());
            }
        }
        if let Ok(mut sender) = self.sender.lock() {
            *sender = Some(events);
        }
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut sender) = self.sender.lock() {
            sender.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_delivers_queued_and_emitted_events() {
        let recognizer =
            ScriptedRecognizer::new().on_start([SpeechEvent::Transcript("hello".to_string())]);
        let (tx, mut rx) = mpsc::unbounded_channel();

        recognizer
            .start(
                RecognitionConfig {
                    lang: "en-US".to_string(),
                    continuous: false,
                    interim_results: false,
                },
                tx,
            )
            .unwrap();

        assert!(recognizer.emit(SpeechEvent::End));
        assert_eq!(
            rx.recv().await,
            Some(SpeechEvent::Transcript("hello".to_string()))
        );
        assert_eq!(rx.recv().await, Some(SpeechEvent::End));

        recognizer.stop();
        assert!(!recognizer.emit(SpeechEvent::End));
        assert_eq!(rx.recv().await, None);
        assert_eq!(recognizer.starts(), 1);
        assert_eq!(recognizer.stops(), 1);
    }

    #[test]
    fn test_failing_start() {
        let recognizer = ScriptedRecognizer::failing("microphone denied");
        let (tx, _rx) = mpsc::unbounded_channel();
        let config = RecognitionConfig {
            lang: "fa-IR".to_string(),
            continuous: false,
            interim_results: false,
        };
        assert_eq!(
            recognizer.start(config, tx),
            Err(VoiceError::Start("microphone denied".to_string()))
        );
    }
}
