//! Authentication state container.
//!
//! DESIGN
//! ======
//! `AuthState` mirrors the session: an authenticated flag, the current user,
//! and per-operation messages. Transitions are pure reducer methods so the
//! contract is testable without any adapter; `AuthStore` drives them around
//! the async calls. Errors never escape the store — they land in
//! `login_error` / `registration_error` and the store stays dispatchable.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::net::CopperApi;
use crate::net::types::{Credentials, RegistrationDto, User};

/// Suffix of every registration success message.
pub const REGISTRATION_SUCCESS_MESSAGE: &str =
    "Registration successful! Please check your email to confirm your account.";

// =============================================================================
// STATE
// =============================================================================

/// In-memory session state. `authenticated` implies `user` is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    pub login_error: Option<String>,
    pub registration_error: Option<String>,
    pub registration_success: Option<String>,
}

impl AuthState {
    pub fn login_pending(&mut self) {
        self.authenticated = false;
        self.login_error = None;
    }

    pub fn login_fulfilled(&mut self, user: User) {
        self.authenticated = true;
        self.user = Some(user);
        self.login_error = None;
    }

    pub fn login_rejected(&mut self, message: String) {
        self.authenticated = false;
        self.user = None;
        self.login_error = Some(message);
    }

    pub fn register_pending(&mut self) {
        self.authenticated = false;
        self.registration_error = None;
        self.registration_success = None;
    }

    /// A registration response may or may not open a session immediately.
    /// Either way the success message is composed from the submitted names.
    pub fn register_fulfilled(&mut self, user: Option<User>, first_name: &str, last_name: &str) {
        match user {
            Some(user) => {
                self.authenticated = true;
                self.user = Some(user);
            }
            None => {
                self.authenticated = false;
                self.user = None;
            }
        }
        self.registration_error = None;
        self.registration_success = Some(registration_success_message(first_name, last_name));
    }

    pub fn register_rejected(&mut self, message: String) {
        self.authenticated = false;
        self.user = None;
        self.registration_success = None;
        self.registration_error = Some(message);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `"Hello {first} {last}! "` when both names are present, a single-name
/// greeting when only one is, no prefix otherwise.
fn registration_success_message(first_name: &str, last_name: &str) -> String {
    let name = if !first_name.is_empty() && !last_name.is_empty() {
        format!("{first_name} {last_name}")
    } else if !first_name.is_empty() {
        first_name.to_owned()
    } else {
        last_name.to_owned()
    };

    if name.is_empty() {
        REGISTRATION_SUCCESS_MESSAGE.to_owned()
    } else {
        format!("Hello {name}! {REGISTRATION_SUCCESS_MESSAGE}")
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Shared auth container. Clone hands out another handle to the same state.
#[derive(Clone)]
pub struct AuthStore {
    api: Arc<dyn CopperApi>,
    state: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    #[must_use]
    pub fn new(api: Arc<dyn CopperApi>) -> Self {
        Self { api, state: Arc::new(RwLock::new(AuthState::default())) }
    }

    pub async fn snapshot(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Dispatch a login. Returns `true` when it fulfilled, so the caller can
    /// navigate; the failure message is in [`AuthState::login_error`].
    pub async fn login(&self, credentials: Credentials) -> bool {
        info!(email = %credentials.email, "auth: login dispatched");
        self.state.write().await.login_pending();

        let result = self.api.login(&credentials).await;
        let mut state = self.state.write().await;
        match result {
            Ok(user) => {
                state.login_fulfilled(user);
                true
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "auth: login failed");
                state.login_rejected(message);
                false
            }
        }
    }

    pub async fn register(&self, dto: RegistrationDto) {
        info!(email = %dto.email, "auth: registration dispatched");
        self.state.write().await.register_pending();

        let result = self.api.register(&dto).await;
        let mut state = self.state.write().await;
        match result {
            Ok(response) => state.register_fulfilled(response.user, &dto.first_name, &dto.last_name),
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "auth: registration failed");
                state.register_rejected(message);
            }
        }
    }

    /// Best-effort server-side logout; local state is cleared regardless.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            warn!(error = %e.user_message(), "auth: logout request failed");
        }
        self.state.write().await.reset();
        info!("auth: session cleared");
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
