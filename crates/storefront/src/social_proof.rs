//! Periodic "someone just bought..." notices.
//!
//! Runs on its own timer, independent of the chat: the first notice shows
//! shortly after start with the first message, later ones pick a message at
//! random once per period. Each notice is hidden again after a short display
//! time.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, sleep_until, Instant};
use tracing::debug;

/// Translation keys of the rotating messages.
pub const MESSAGE_KEYS: [&str; 4] = [
    "marketing.msg1",
    "marketing.msg2",
    "marketing.msg3",
    "marketing.msg4",
];

/// Show or hide the notice bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofEvent {
    Show(&'static str),
    Hide,
}

/// Timing of the notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialProofConfig {
    /// Delay before the first notice.
    pub first_delay: Duration,
    /// Interval between later notices.
    pub period: Duration,
    /// How long each notice stays visible.
    pub display: Duration,
}

impl Default for SocialProofConfig {
    fn default() -> Self {
        Self {
            first_delay: Duration::from_secs(15),
            period: Duration::from_secs(90),
            display: Duration::from_secs(5),
        }
    }
}

/// The notice scheduler.
#[derive(Debug, Clone)]
pub struct SocialProof {
    config: SocialProofConfig,
    seed: Option<u64>,
}

impl SocialProof {
    pub fn new(config: SocialProofConfig) -> Self {
        Self { config, seed: None }
    }

    /// Use a fixed seed for the message choice.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run until the receiver is dropped.
    pub fn spawn(self, events: mpsc::Sender<ProofEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    async fn run(self, events: mpsc::Sender<ProofEvent>) {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let start = Instant::now();
        let first = sleep_until(start + self.config.first_delay);
        tokio::pin!(first);
        let mut first_done = false;
        let mut cycle = interval_at(start + self.config.period, self.config.period);

        loop {
            let key = tokio::select! {
                _ = &mut first, if !first_done => {
                    first_done = true;
                    MESSAGE_KEYS[0]
                }
                _ = cycle.tick() => MESSAGE_KEYS[rng.gen_range(0..MESSAGE_KEYS.len())],
            };

            debug!("Showing social proof notice: {}", key);
            if events.send(ProofEvent::Show(key)).await.is_err() {
                return;
            }
            sleep(self.config.display).await;
            if events.send(ProofEvent::Hide).await.is_err() {
                return;
            }
        }
    }
}

impl Default for SocialProof {
    fn default() -> Self {
        Self::new(SocialProofConfig::default())
    }
}
