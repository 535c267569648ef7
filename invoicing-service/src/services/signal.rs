//! Completion signals that move a pending submission to accepted.
//!
//! The ledger does not care where the signal comes from. The dashboard uses
//! [`TimerSignal`] to stand in for an invoice-issuing backend; tests use
//! [`ManualSignal`] to fire deterministically.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Notify;
use tracing::debug;

use crate::config::DEFAULT_SUBMISSION_DELAY;
use crate::models::SubmissionId;

#[async_trait]
pub trait CompletionSignal: Send + Sync {
    /// Resolve once the submission `id` has completed.
    async fn wait(&self, id: SubmissionId);
}

/// Fires after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct TimerSignal {
    delay: Duration,
}

impl TimerSignal {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for TimerSignal {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMISSION_DELAY)
    }
}

#[async_trait]
impl CompletionSignal for TimerSignal {
    async fn wait(&self, id: SubmissionId) {
        debug!(submission_id = %id, delay_ms = self.delay.as_millis() as u64, "Waiting on timer");
        tokio::time::sleep(self.delay).await;
    }
}

/// Fires when [`ManualSignal::fire`] is called.
///
/// A fire that happens before anyone waits is kept, so the next wait returns
/// immediately. Each fire releases one wait.
#[derive(Debug, Default)]
pub struct ManualSignal {
    notify: Notify,
}

impl ManualSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fire(&self) {
        self.notify.notify_one();
    }
}

#[async_trait]
impl CompletionSignal for ManualSignal {
    async fn wait(&self, id: SubmissionId) {
        debug!(submission_id = %id, "Waiting on manual signal");
        self.notify.notified().await;
    }
}
