//! Interactive chat with Spin on the terminal.

use chat_session::{ChatMessage, ChatSession, Role, SessionError, SessionEvent, VoiceError};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};
use tracing::debug;

use crate::error::StorefrontError;
use crate::social_proof::{ProofEvent, SocialProof};
use crate::view::ViewContext;

/// A line typed at the chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Send the text to the assistant.
    Send(String),
    /// Toggle voice capture.
    Voice,
    /// Show the chat panel.
    Open,
    /// Hide the chat panel.
    Close,
    /// Leave the chat.
    Quit,
    /// Print the available commands.
    Help,
    /// Nothing typed.
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => ReplCommand::Empty,
            "/voice" => ReplCommand::Voice,
            "/open" => ReplCommand::Open,
            "/close" => ReplCommand::Close,
            "/quit" | "/exit" => ReplCommand::Quit,
            "/help" => ReplCommand::Help,
            text => ReplCommand::Send(text.to_string()),
        }
    }
}

const HELP: &str = "/voice  toggle voice input\n/open   show the chat\n/close  hide the chat\n/quit   leave";

/// Tracks which messages the terminal has already printed.
struct Transcript {
    ctx: ViewContext,
    shown: usize,
}

impl Transcript {
    fn line(&self, role: Role, text: &str) -> String {
        let speaker = match role {
            Role::User => self.ctx.muted("you"),
            Role::Model => self.ctx.accent("Spin"),
        };
        self.ctx.directed(&format!("{}: {}", speaker, text))
    }

    /// Print the assistant messages appended since the last call.
    async fn catch_up(&mut self, session: &ChatSession) {
        let history = session.history().await;
        for message in history.iter().skip(self.shown) {
            if message.role == Role::Model {
                println!("{}", self.line(message.role, &message.text));
            }
        }
        self.shown = history.len();
    }
}

/// Run the chat prompt until `/quit` or end of input.
pub async fn run_chat(
    session: ChatSession,
    ctx: ViewContext,
    social_proof: bool,
) -> Result<(), StorefrontError> {
    let mut events = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let (proof_tx, mut proof_rx) = mpsc::channel(4);
    let ticker = social_proof.then(|| SocialProof::default().spawn(proof_tx));

    let mut transcript = Transcript { ctx, shown: 0 };
    session.open().await;
    transcript.catch_up(&session).await;
    println!("{}", ctx.muted(&ctx.t("chat.placeholder")));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match ReplCommand::parse(&line) {
                    ReplCommand::Empty => {}
                    ReplCommand::Help => println!("{}", HELP),
                    ReplCommand::Quit => break,
                    ReplCommand::Open => {
                        session.open().await;
                        transcript.catch_up(&session).await;
                    }
                    ReplCommand::Close => session.close().await,
                    ReplCommand::Voice => {
                        // Failures arrive as a notice event.
                        if let Err(VoiceError::Start(detail)) =
                            session.toggle_voice_capture(ctx.locale).await
                        {
                            println!("{}", ctx.muted(&detail));
                        }
                    }
                    ReplCommand::Send(text) => {
                        if !session.is_open().await {
                            println!("{}", ctx.muted("/open"));
                            continue;
                        }
                        spawn_turn(session.clone(), text, ctx);
                    }
                }
            }
            event = events.recv() => match event {
                Ok(event) => {
                    if session.is_open().await {
                        handle_event(&mut transcript, &session, event).await;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    debug!("Chat printer skipped {} events", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            Some(proof) = proof_rx.recv() => {
                if let ProofEvent::Show(key) = proof {
                    println!(
                        "{}",
                        ctx.muted(&format!("* {} · {}", ctx.t(key), ctx.t("marketing.just_now")))
                    );
                }
            }
        }
    }

    if let Some(ticker) = ticker {
        ticker.abort();
    }
    Ok(())
}

/// Submit one message without blocking the prompt.
fn spawn_turn(session: ChatSession, text: String, ctx: ViewContext) {
    tokio::spawn(async move {
        let _ = submit_line(&session, &text, ctx).await;
    });
}

/// Send a typed line straight to the session, bypassing the shared input
/// buffer so concurrent lines cannot overwrite each other.
async fn submit_line(
    session: &ChatSession,
    text: &str,
    ctx: ViewContext,
) -> Result<ChatMessage, SessionError> {
    let result = session.submit(text).await;
    match &result {
        Ok(_) | Err(SessionError::EmptyMessage) => {}
        Err(SessionError::AwaitingReply) => {
            println!("{}", ctx.muted(&ctx.t("chat.thinking")));
        }
        Err(e) => println!("{}", ctx.muted(&e.to_string())),
    }
    result
}

async fn handle_event(transcript: &mut Transcript, session: &ChatSession, event: SessionEvent) {
    let ctx = transcript.ctx;
    match event {
        SessionEvent::MessageAppended(_) => transcript.catch_up(session).await,
        SessionEvent::StateChanged(chat_session::ChatState::AwaitingReply) => {
            println!("{}", ctx.muted(&ctx.t("chat.thinking")));
        }
        SessionEvent::ListeningChanged(true) => {
            println!("{}", ctx.muted(&ctx.t("chat.listening")));
        }
        SessionEvent::Notice(text) => println!("{}", ctx.muted(&text)),
        SessionEvent::StateChanged(_)
        | SessionEvent::ListeningChanged(false)
        | SessionEvent::ScrollToLatest => {}
    }
}
