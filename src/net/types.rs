//! Wire types and errors for the copper REST API.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is the only error type that crosses the adapter boundary.
//! Stores never propagate it: they fold [`ApiError::user_message`] into a
//! state field and return to a re-dispatchable state. The extraction
//! precedence (body `message`, body `error`, fixed fallback) is a contract,
//! not an implementation detail.

use serde::{Deserialize, Serialize};

/// Shown when the server rejected a request without a usable error body.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Shown when no response was received at all.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or server is unavailable";

// =============================================================================
// ERROR
// =============================================================================

/// Structured error body the API attaches to non-2xx responses.
/// Both fields are optional; anything else in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors produced by API adapter calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The server responded with a non-2xx status.
    #[error("request failed: status {status}")]
    Request {
        status: u16,
        message: Option<String>,
        error: Option<String>,
    },

    /// No response was received (connect failure, timeout, bad body).
    #[error("transport error: {0}")]
    Transport(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

impl ApiError {
    /// Human-readable message for display, extracted by precedence:
    /// body `message`, then body `error`, then a fixed fallback —
    /// [`INTERNAL_ERROR_MESSAGE`] for rejected requests,
    /// [`NETWORK_ERROR_MESSAGE`] when no response arrived.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { message, error, .. } => message
                .clone()
                .or_else(|| error.clone())
                .unwrap_or_else(|| INTERNAL_ERROR_MESSAGE.to_owned()),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
            Self::ClientBuild(detail) => detail.clone(),
        }
    }

    /// The body `message` field alone, for flows with their own fallback copy.
    #[must_use]
    pub fn message_field(&self) -> Option<&str> {
        match self {
            Self::Request { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Role assigned by the server to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// Authenticated identity returned by login/registration. Held in memory
/// for the session only; dropped on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub confirmation_resent: bool,
}

/// Login input. Transient; never stored after submission.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Registration response. The user is present only when the server opens a
/// session immediately instead of waiting for email confirmation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub user: Option<User>,
}

/// Reset-password input: opaque token from the reset link plus the new value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub token: String,
    pub new_password: String,
}

// =============================================================================
// PROFILE
// =============================================================================

/// Email-confirmation status reported on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    Unconfirmed,
    Confirmed,
}

/// Current-user profile returned by `/users/me` and `/users/update`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub confirmation_status: Option<ConfirmationStatus>,
}

/// Profile update input.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub display_name: String,
    pub position: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub bio: String,
}

/// Change-password input. The confirmation is re-checked server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

// =============================================================================
// PROJECTS
// =============================================================================

/// A project entity. The id is server-assigned and opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Project creation input.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProjectDto {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
