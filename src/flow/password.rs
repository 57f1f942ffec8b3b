//! Password reset request flows.
//!
//! Two independent request wrappers, each a single [`OpState`] with no
//! machinery beyond it. Failure copy comes from the server's `message`
//! field when present, otherwise from a flow-specific fallback.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;

use crate::net::CopperApi;
use crate::net::types::ResetPasswordDto;
use crate::state::lifecycle::OpState;

pub const FORGOT_PASSWORD_FALLBACK: &str = "An error occurred. Please try again later.";
pub const RESET_PASSWORD_FALLBACK: &str =
    "This link is invalid or has expired. Please request a new one.";
pub const MISSING_TOKEN_MESSAGE: &str =
    "Invalid or missing token. Please request a new password reset.";

// =============================================================================
// FORGOT PASSWORD
// =============================================================================

/// Requests a reset email. Fulfilled means "sent if the account exists";
/// the server deliberately does not reveal more.
pub struct ForgotPasswordFlow {
    api: Arc<dyn CopperApi>,
    state: RwLock<OpState<()>>,
}

impl ForgotPasswordFlow {
    #[must_use]
    pub fn new(api: Arc<dyn CopperApi>) -> Self {
        Self { api, state: RwLock::new(OpState::Idle) }
    }

    pub async fn state(&self) -> OpState<()> {
        self.state.read().await.clone()
    }

    pub async fn submit(&self, email: &str) {
        self.state.write().await.begin();

        let result = self.api.forgot_password(email).await;
        let mut state = self.state.write().await;
        match result {
            Ok(()) => *state = OpState::Fulfilled(()),
            Err(e) => {
                warn!(error = %e.user_message(), "password: forgot request failed");
                let message = e
                    .message_field()
                    .unwrap_or(FORGOT_PASSWORD_FALLBACK)
                    .to_owned();
                state.reject(message);
            }
        }
    }
}

// =============================================================================
// RESET PASSWORD
// =============================================================================

/// Executes a reset with the opaque token carried by the emailed link.
/// Submitting with no token fails locally without any network call.
pub struct ResetPasswordFlow {
    api: Arc<dyn CopperApi>,
    token: Option<String>,
    state: RwLock<OpState<()>>,
}

impl ResetPasswordFlow {
    #[must_use]
    pub fn new(api: Arc<dyn CopperApi>, token: Option<String>) -> Self {
        Self { api, token: token.filter(|t| !t.is_empty()), state: RwLock::new(OpState::Idle) }
    }

    pub async fn state(&self) -> OpState<()> {
        self.state.read().await.clone()
    }

    pub async fn submit(&self, new_password: &str) {
        let Some(token) = &self.token else {
            self.state.write().await.reject(MISSING_TOKEN_MESSAGE);
            return;
        };

        self.state.write().await.begin();
        let dto = ResetPasswordDto { token: token.clone(), new_password: new_password.to_owned() };

        let result = self.api.reset_password(&dto).await;
        let mut state = self.state.write().await;
        match result {
            Ok(()) => *state = OpState::Fulfilled(()),
            Err(e) => {
                warn!(error = %e.user_message(), "password: reset failed");
                let message = e
                    .message_field()
                    .unwrap_or(RESET_PASSWORD_FALLBACK)
                    .to_owned();
                state.reject(message);
            }
        }
    }
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
