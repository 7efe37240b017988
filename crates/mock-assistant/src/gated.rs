//! Gated assistant implementation - holds calls until the test releases them.

use std::sync::atomic::{AtomicUsize, Ordering};

use assistant_core::{async_trait, Assistant, ChatMessage, FallbackMessages, GatewayOutcome};
use tokio::sync::{Notify, Semaphore};

/// An assistant whose calls block until [`release`](Self::release) is called.
///
/// Lets tests observe a session while a reply is in flight.
pub struct GatedAssistant<A: Assistant> {
    inner: A,
    gate: Semaphore,
    entered: AtomicUsize,
    entered_notify: Notify,
}

impl<A: Assistant> GatedAssistant<A> {
    /// Wrap `inner` with a closed gate.
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            gate: Semaphore::new(0),
            entered: AtomicUsize::new(0),
            entered_notify: Notify::new(),
        }
    }

    /// Let `calls` pending or future calls through.
    pub fn release(&self, calls: usize) {
        self.gate.add_permits(calls);
    }

    /// Number of calls that reached the gate.
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }

    /// Wait until at least `calls` calls have reached the gate.
    pub async fn wait_for_calls(&self, calls: usize) {
        loop {
            let notified = self.entered_notify.notified();
            if self.entered() >= calls {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl<A: Assistant> Assistant for GatedAssistant<A> {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> GatewayOutcome {
        self.entered.fetch_add(1, Ordering::SeqCst);
        self.entered_notify.notify_waiters();

        match self.gate.acquire().await {
            Ok(permit) => permit.forget(),
            Err(_) => return GatewayOutcome::NetworkError("gate closed".to_string()),
        }

        self.inner.respond(history, message).await
    }

    fn name(&self) -> &str {
        "GatedAssistant"
    }

    fn fallbacks(&self) -> FallbackMessages {
        self.inner.fallbacks()
    }
}
