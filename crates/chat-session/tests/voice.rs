//! Voice capture through the speech recognizer capability.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chat_session::{
    ChatSession, RecognitionConfig, SessionEvent, SpeechEvent, SpeechRecognizer, VoiceError,
};
use mock_assistant::{EchoAssistant, ScriptedRecognizer};
use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;
use translations::Locale;

async fn wait_for(rx: &mut broadcast::Receiver<SessionEvent>, wanted: SessionEvent) {
    loop {
        let event = timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed");
        if event == wanted {
            return;
        }
    }
}

fn session_with(recognizer: Arc<ScriptedRecognizer>) -> ChatSession {
    ChatSession::builder(Arc::new(EchoAssistant::new()))
        .recognizer(recognizer)
        .build()
}

#[tokio::test]
async fn test_unsupported_platform_posts_notice() {
    let session = ChatSession::new(Arc::new(EchoAssistant::new()));
    let mut events = session.subscribe();

    assert_eq!(
        session.toggle_voice_capture(Locale::En).await,
        Err(VoiceError::Unsupported)
    );
    assert!(!session.is_listening().await);
    wait_for(
        &mut events,
        SessionEvent::Notice("Your device does not support voice input.".to_string()),
    )
    .await;
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn test_transcript_joins_pending_input() {
    let recognizer = Arc::new(
        ScriptedRecognizer::new().on_start([SpeechEvent::Transcript("Kind of Blue".to_string())]),
    );
    let session = session_with(recognizer.clone());
    let mut events = session.subscribe();

    session.set_input("Do you have").await;
    assert_eq!(session.toggle_voice_capture(Locale::Fa).await, Ok(true));
    wait_for(&mut events, SessionEvent::ListeningChanged(true)).await;
    wait_for(&mut events, SessionEvent::ListeningChanged(false)).await;

    assert_eq!(session.input().await, "Do you have Kind of Blue");
    assert!(!session.is_listening().await);
    assert_eq!(recognizer.stops(), 1);

    let config = recognizer.last_config().unwrap();
    assert_eq!(config.lang, "fa-IR");
    assert!(!config.continuous);
    assert!(!config.interim_results);

    // Capture only fills the input; nothing is sent.
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn test_transcript_fills_empty_input() {
    let recognizer = Arc::new(
        ScriptedRecognizer::new().on_start([SpeechEvent::Transcript("hola".to_string())]),
    );
    let session = session_with(recognizer);
    let mut events = session.subscribe();

    session.toggle_voice_capture(Locale::Es).await.unwrap();
    wait_for(&mut events, SessionEvent::ListeningChanged(false)).await;
    assert_eq!(session.input().await, "hola");
}

#[tokio::test]
async fn test_toggle_twice_stops_capture() {
    let recognizer = Arc::new(ScriptedRecognizer::new());
    let session = session_with(recognizer.clone());

    assert_eq!(session.toggle_voice_capture(Locale::En).await, Ok(true));
    assert!(session.is_listening().await);

    assert_eq!(session.toggle_voice_capture(Locale::En).await, Ok(false));
    assert!(!session.is_listening().await);
    assert_eq!(recognizer.stops(), 1);

    // The capture is gone; late events go nowhere.
    assert!(!recognizer.emit(SpeechEvent::Transcript("too late".to_string())));
    assert_eq!(session.input().await, "");

    // Capture can start again.
    assert_eq!(session.toggle_voice_capture(Locale::En).await, Ok(true));
    assert_eq!(recognizer.starts(), 2);
}

#[tokio::test]
async fn test_recognition_error_resets_listening() {
    let recognizer = Arc::new(ScriptedRecognizer::new());
    let session = session_with(recognizer.clone());
    let mut events = session.subscribe();

    session.set_input("typed").await;
    session.toggle_voice_capture(Locale::En).await.unwrap();
    assert!(recognizer.emit(SpeechEvent::Error("no-speech".to_string())));
    wait_for(&mut events, SessionEvent::ListeningChanged(false)).await;

    assert!(!session.is_listening().await);
    assert_eq!(session.input().await, "typed");
    assert!(session.history().await.is_empty());
}

#[tokio::test]
async fn test_end_without_transcript_resets_listening() {
    let recognizer = Arc::new(ScriptedRecognizer::new().on_start([SpeechEvent::End]));
    let session = session_with(recognizer);
    let mut events = session.subscribe();

    session.toggle_voice_capture(Locale::En).await.unwrap();
    wait_for(&mut events, SessionEvent::ListeningChanged(false)).await;
    assert!(!session.is_listening().await);
    assert_eq!(session.input().await, "");
}

#[tokio::test]
async fn test_failed_start_does_not_listen() {
    let recognizer = Arc::new(ScriptedRecognizer::failing("not-allowed"));
    let session = session_with(recognizer);

    assert_eq!(
        session.toggle_voice_capture(Locale::En).await,
        Err(VoiceError::Start("not-allowed".to_string()))
    );
    assert!(!session.is_listening().await);
}

/// A recognizer that keeps every event sender, even after `stop`.
#[derive(Default)]
struct HoardingRecognizer {
    senders: Mutex<Vec<mpsc::UnboundedSender<SpeechEvent>>>,
}

impl SpeechRecognizer for HoardingRecognizer {
    fn start(
        &self,
        _config: RecognitionConfig,
        events: mpsc::UnboundedSender<SpeechEvent>,
    ) -> Result<(), VoiceError> {
        self.senders.lock().unwrap().push(events);
        Ok(())
    }

    fn stop(&self) {}
}

#[tokio::test]
async fn test_stopping_ends_pump_when_recognizer_keeps_channel() {
    let recognizer = Arc::new(HoardingRecognizer::default());
    let session = ChatSession::builder(Arc::new(EchoAssistant::new()))
        .recognizer(recognizer.clone())
        .build();

    for _ in 0..3 {
        assert_eq!(session.toggle_voice_capture(Locale::En).await, Ok(true));
        assert_eq!(session.toggle_voice_capture(Locale::En).await, Ok(false));
    }

    let senders = recognizer.senders.lock().unwrap().clone();
    assert_eq!(senders.len(), 3);
    for sender in senders {
        // The receiving side goes away once the pump task exits.
        timeout(Duration::from_secs(5), sender.closed())
            .await
            .expect("event pump still running after stop");
    }
    assert!(!session.is_listening().await);
}
