//! Email-confirmation flow.
//!
//! One-shot state machine: `Idle -> Loading -> Confirmed | Failed`. A missing
//! code fails immediately without a network call, a settled flow is never
//! restarted (re-entering the page means a fresh instance), and cancelling
//! discards the outcome of an in-flight call so a torn-down consumer is
//! never mutated.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::warn;

use crate::net::CopperApi;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmState {
    Idle,
    Loading,
    Confirmed,
    Failed,
}

pub struct ConfirmFlow {
    state: Mutex<ConfirmState>,
    cancelled: AtomicBool,
}

impl ConfirmFlow {
    #[must_use]
    pub fn new() -> Self {
        Self { state: Mutex::new(ConfirmState::Idle), cancelled: AtomicBool::new(false) }
    }

    #[must_use]
    pub fn state(&self) -> ConfirmState {
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.state() == ConfirmState::Confirmed
    }

    /// Discard any outcome that has not been applied yet. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn apply(&self, next: ConfirmState) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return false;
        }
        *self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = next;
        true
    }

    /// Drive the flow once. A `None` or empty code fails without touching
    /// the network; otherwise exactly one confirmation call is made and the
    /// flow settles on its outcome. Calling again after the flow left
    /// `Idle` is a no-op.
    pub async fn run(&self, api: &dyn CopperApi, code: Option<&str>) {
        if self.state() != ConfirmState::Idle {
            warn!("confirmation flow already driven");
            return;
        }

        let Some(code) = code.filter(|c| !c.is_empty()) else {
            self.apply(ConfirmState::Failed);
            return;
        };

        if !self.apply(ConfirmState::Loading) {
            return;
        }

        match api.confirm_registration(code).await {
            Ok(()) => {
                self.apply(ConfirmState::Confirmed);
            }
            Err(e) => {
                warn!(error = %e.user_message(), "confirmation failed");
                self.apply(ConfirmState::Failed);
            }
        }
    }
}

impl Default for ConfirmFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the flow as a background task.
pub fn spawn_confirm(
    flow: Arc<ConfirmFlow>,
    api: Arc<dyn CopperApi>,
    code: Option<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        flow.run(api.as_ref(), code.as_deref()).await;
    })
}

#[cfg(test)]
#[path = "confirm_test.rs"]
mod tests;
