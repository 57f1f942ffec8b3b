//! Post-registration redirect countdown.
//!
//! After a successful registration the consumer arms a countdown that fires
//! a navigation callback unless the user chooses to stay. Cancellation is
//! idempotent and final until `reset` — which the consumer calls whenever
//! the registration success message goes away, re-arming the countdown for
//! the next cycle. Expiry checks the cancelled flag under the same lock
//! `cancel` takes, so a cancelled countdown never fires.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delay before the consumer is sent back to the sign-in view.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(15);

#[derive(Default)]
struct Inner {
    cancelled: bool,
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

#[derive(Clone, Default)]
pub struct RedirectCountdown {
    inner: Arc<Mutex<Inner>>,
}

impl RedirectCountdown {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start the countdown. No-op while cancelled or already armed.
    pub fn arm<F>(&self, delay: Duration, on_expire: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut inner = self.lock();
        if inner.cancelled || inner.timer.is_some() {
            return;
        }
        inner.epoch += 1;
        let epoch = inner.epoch;

        let shared = Arc::clone(&self.inner);
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let fire = {
                let mut inner = shared.lock().unwrap_or_else(PoisonError::into_inner);
                if inner.cancelled || inner.epoch != epoch {
                    false
                } else {
                    inner.timer = None;
                    true
                }
            };
            if fire {
                on_expire();
            }
        }));
    }

    /// Stop the pending timer and refuse future arming until [`reset`].
    /// Idempotent.
    ///
    /// [`reset`]: RedirectCountdown::reset
    pub fn cancel(&self) {
        let mut inner = self.lock();
        inner.cancelled = true;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }

    /// Stop the pending timer without marking the countdown cancelled
    /// (consumer teardown).
    pub fn disarm(&self) {
        let mut inner = self.lock();
        inner.epoch += 1;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }

    /// Clear the cancelled flag and any pending timer. Called when the
    /// registration success message is cleared, so the next success can arm
    /// a fresh countdown.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.cancelled = false;
        inner.epoch += 1;
        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.lock().timer.is_some()
    }
}

#[cfg(test)]
#[path = "redirect_test.rs"]
mod tests;
