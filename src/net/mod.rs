//! Network layer — the API adapter seam and its HTTP implementation.
//!
//! DESIGN
//! ======
//! Stores and flows depend on the [`CopperApi`] trait, never on reqwest
//! directly, so every async contract is testable against in-memory mocks.
//! [`http::HttpApi`] is the production implementation.

pub mod http;
pub mod types;

use types::{
    ApiError, ChangePasswordDto, CreateProjectDto, Credentials, Project, RegistrationDto,
    RegistrationResponse, ResetPasswordDto, UpdateUserDto, User, UserDetails,
};

/// Async adapter for the copper REST API. One method per endpoint; every
/// failure is an [`ApiError`] for the caller to absorb into state.
#[async_trait::async_trait]
pub trait CopperApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    async fn register(&self, dto: &RegistrationDto) -> Result<RegistrationResponse, ApiError>;

    /// Confirm a registration with the emailed code. 2xx is success; the
    /// response body, if any, is ignored.
    async fn confirm_registration(&self, code: &str) -> Result<(), ApiError>;

    async fn forgot_password(&self, email: &str) -> Result<(), ApiError>;

    async fn reset_password(&self, dto: &ResetPasswordDto) -> Result<(), ApiError>;

    async fn current_user(&self) -> Result<UserDetails, ApiError>;

    async fn update_user(&self, dto: &UpdateUserDto) -> Result<UserDetails, ApiError>;

    async fn change_password(&self, dto: &ChangePasswordDto) -> Result<(), ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError>;

    async fn create_project(&self, dto: &CreateProjectDto) -> Result<Project, ApiError>;
}

// =============================================================================
// TEST HELPERS
// =============================================================================
