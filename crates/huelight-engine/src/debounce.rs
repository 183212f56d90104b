//! Single-slot debounce timer for edit-triggered rescans.
//!
//! Rapid keystrokes must coalesce into one rescan, and a newer edit must
//! win over an older pending one. The scheduler models this as an explicit
//! single-slot pending value: at most one timer is ever outstanding, and
//! scheduling aborts and replaces whatever was there.

use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Debounce delay for edit-triggered rescans.
///
/// Long enough that rapid keystrokes coalesce into a single scan, short
/// enough that highlights do not feel laggy after typing stops.
pub const EDIT_DEBOUNCE_MS: u64 = 500;

/// Schedules at most one delayed rescan at a time.
///
/// Last-edit-wins: `schedule` cancels any pending task before arming a new
/// timer; there is no queueing.
#[derive(Debug)]
pub struct RescanScheduler {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl RescanScheduler {
    /// Creates a scheduler with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// The configured delay.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer, replacing any pending task.
    ///
    /// `task` runs after the delay elapses, unless a newer `schedule` or a
    /// `cancel` aborts it first. Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            trace!("replacing pending rescan");
            previous.abort();
        }

        // Sample the deadline now rather than inside the spawned task, so
        // the delay is measured from this call even if the task's first
        // poll is delayed (e.g. under a paused test clock).
        let deadline = tokio::time::Instant::now() + self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            task.await;
        }));
    }

    /// Aborts the pending task, if any.
    pub fn cancel(&self) {
        if let Some(pending) = self.pending.lock().take() {
            pending.abort();
        }
    }

    /// Returns true if a timer is armed and has not fired yet.
    pub fn has_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Default for RescanScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(EDIT_DEBOUNCE_MS))
    }
}

impl Drop for RescanScheduler {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.get_mut().take() {
            pending.abort();
        }
    }
}
