//! Reqwest implementation of [`CopperApi`].
//!
//! Thin HTTP wrapper: one method per endpoint, shared status/body handling
//! in `check` and `read_json`. The session is cookie-based, so the client
//! carries a cookie store; no token plumbing happens here.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::CopperApi;
use super::types::{
    ApiError, ApiErrorBody, ChangePasswordDto, CreateProjectDto, Credentials, Project,
    RegistrationDto, RegistrationResponse, ResetPasswordDto, UpdateUserDto, User, UserDetails,
};
use crate::config::ApiConfig;

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build the HTTP client with the configured timeouts and a cookie store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the reqwest builder fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Build from environment variables via [`ApiConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the reqwest builder fails.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ApiConfig::from_env())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = check(self.http.get(self.url(path)).send().await).await?;
        read_json(resp).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = check(self.http.post(self.url(path)).json(body).send().await).await?;
        read_json(resp).await
    }

    async fn post_unit<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        check(self.http.post(self.url(path)).json(body).send().await).await?;
        Ok(())
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = check(self.http.put(self.url(path)).json(body).send().await).await?;
        read_json(resp).await
    }
}

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

/// Map a send result to the error taxonomy: no response at all becomes
/// [`ApiError::Transport`], a non-2xx status becomes [`ApiError::Request`]
/// with the body parsed tolerantly (absent/invalid JSON yields empty fields).
async fn check(result: Result<reqwest::Response, reqwest::Error>) -> Result<reqwest::Response, ApiError> {
    let resp = result.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let text = resp.text().await.unwrap_or_default();
    let body: ApiErrorBody = serde_json::from_str(&text).unwrap_or_default();
    Err(ApiError::Request { status: status.as_u16(), message: body.message, error: body.error })
}

async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[async_trait::async_trait]
impl CopperApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    async fn register(&self, dto: &RegistrationDto) -> Result<RegistrationResponse, ApiError> {
        self.post_json("/users/register", dto).await
    }

    async fn confirm_registration(&self, code: &str) -> Result<(), ApiError> {
        let path = format!("/users/confirm/{code}");
        check(self.http.get(self.url(&path)).send().await).await?;
        Ok(())
    }

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        self.post_unit("/password/forgot", &serde_json::json!({ "email": email }))
            .await
    }

    async fn reset_password(&self, dto: &ResetPasswordDto) -> Result<(), ApiError> {
        self.post_unit("/password/reset", dto).await
    }

    async fn current_user(&self) -> Result<UserDetails, ApiError> {
        self.get_json("/users/me").await
    }

    async fn update_user(&self, dto: &UpdateUserDto) -> Result<UserDetails, ApiError> {
        self.put_json("/users/update", dto).await
    }

    async fn change_password(&self, dto: &ChangePasswordDto) -> Result<(), ApiError> {
        check(
            self.http
                .put(self.url("/users/password"))
                .json(dto)
                .send()
                .await,
        )
        .await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        check(self.http.post(self.url("/auth/logout")).send().await).await?;
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_json("/projects").await
    }

    async fn create_project(&self, dto: &CreateProjectDto) -> Result<Project, ApiError> {
        self.post_json("/projects", dto).await
    }
}
