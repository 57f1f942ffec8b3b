//! Current-user profile container: fetch, update, change password.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::lifecycle::OpState;
use crate::net::CopperApi;
use crate::net::types::{ChangePasswordDto, UpdateUserDto, UserDetails};

/// Profile details plus the lifecycle of each account operation. A
/// successful update replaces `details` with the server's response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    pub details: OpState<UserDetails>,
    pub update: OpState<()>,
    pub password_change: OpState<()>,
}

#[derive(Clone)]
pub struct AccountStore {
    api: Arc<dyn CopperApi>,
    state: Arc<RwLock<AccountState>>,
}

impl AccountStore {
    #[must_use]
    pub fn new(api: Arc<dyn CopperApi>) -> Self {
        Self { api, state: Arc::new(RwLock::new(AccountState::default())) }
    }

    pub async fn snapshot(&self) -> AccountState {
        self.state.read().await.clone()
    }

    pub async fn load(&self) {
        self.state.write().await.details.begin();

        let result = self.api.current_user().await;
        if let Err(e) = &result {
            warn!(error = %e.user_message(), "account: profile fetch failed");
        }
        self.state.write().await.details.settle(result);
    }

    pub async fn update(&self, dto: UpdateUserDto) {
        self.state.write().await.update.begin();

        let result = self.api.update_user(&dto).await;
        let mut state = self.state.write().await;
        match result {
            Ok(details) => {
                info!("account: profile updated");
                state.details = OpState::Fulfilled(details);
                state.update = OpState::Fulfilled(());
            }
            Err(e) => {
                let message = e.user_message();
                warn!(error = %message, "account: profile update failed");
                state.update.reject(message);
            }
        }
    }

    pub async fn change_password(&self, dto: ChangePasswordDto) {
        self.state.write().await.password_change.begin();

        let result = self.api.change_password(&dto).await;
        if let Err(e) = &result {
            warn!(error = %e.user_message(), "account: password change failed");
        }
        self.state.write().await.password_change.settle(result);
    }
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
