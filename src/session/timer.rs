//! Single-shot delay between showing feedback and the next question.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default time feedback stays on screen.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Sent once a scheduled delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackElapsed {
    pub ticket: u64,
}

/// Schedules at most one pending feedback delay.
///
/// Dropping the timer aborts the pending delay, so nothing fires after
/// the owner is gone.
#[derive(Debug)]
pub struct FeedbackTimer {
    delay: Duration,
    next_ticket: u64,
    pending: Option<(u64, JoinHandle<()>)>,
}

impl FeedbackTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_ticket: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start a new delay, replacing any pending one. Must be called inside a
    /// tokio runtime.
    pub fn schedule(&mut self, tx: &mpsc::UnboundedSender<FeedbackElapsed>) -> u64 {
        self.cancel();

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        let delay = self.delay;
        let tx = tx.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(FeedbackElapsed { ticket });
        });

        tracing::trace!("Scheduled feedback delay #{} ({:?})", ticket, delay);
        self.pending = Some((ticket, handle));
        ticket
    }

    /// Consume an elapsed notification. Returns false for stale tickets.
    pub fn accept(&mut self, elapsed: FeedbackElapsed) -> bool {
        match &self.pending {
            Some((ticket, _)) if *ticket == elapsed.ticket => {
                self.pending = None;
                true
            }
            _ => {
                tracing::debug!("Ignoring stale feedback ticket #{}", elapsed.ticket);
                false
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            handle.abort();
            tracing::trace!("Cancelled feedback delay #{}", ticket);
        }
    }
}

impl Default for FeedbackTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DELAY)
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
