//! Eager field validation, evaluated before any dispatch.
//!
//! DESIGN
//! ======
//! Each form has one plain function returning a map from field name to the
//! first failing rule's message; an empty map means the input may be
//! dispatched. Containers do not re-validate — a value that bypasses these
//! checks is the server's problem to reject.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::net::types::{ChangePasswordDto, CreateProjectDto, RegistrationDto, UserDetails};

/// Field name -> first failing rule's message.
pub type FieldErrors = BTreeMap<&'static str, String>;

fn compile(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("static pattern must compile"))
}

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn person_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"^[a-zA-Zа-яА-ЯёЁ\s'-]+$")
}

fn capitalized_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"^[A-ZА-Я]")
}

fn profile_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"^[\p{L}\p{N}\- ]+$")
}

fn image_ext_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"(?i)\.(jpe?g|png|webp)$")
}

fn html_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    compile(&RE, r"<[^>]*>")
}

// =============================================================================
// SIGN IN / REGISTRATION
// =============================================================================

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !email_re().is_match(email) {
        errors.insert("email", "Invalid email address".into());
    }

    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.chars().count() < 8 {
        errors.insert("password", "Password must be at least 8 characters".into());
    }

    errors
}

pub fn validate_registration(dto: &RegistrationDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = person_name_error(&dto.first_name, "First name") {
        errors.insert("firstName", message);
    }
    if let Some(message) = person_name_error(&dto.last_name, "Last name") {
        errors.insert("lastName", message);
    }

    if dto.email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if dto.email.chars().count() > 255 {
        errors.insert("email", "Email must not exceed 255 characters".into());
    } else if !email_re().is_match(&dto.email) {
        errors.insert("email", "Email format is invalid".into());
    }

    if let Some(message) = registration_password_error(&dto.password) {
        errors.insert("password", message);
    }

    errors
}

fn person_name_error(value: &str, label: &str) -> Option<String> {
    if value.is_empty() {
        return Some(format!("{label} is required"));
    }
    let length = value.chars().count();
    if length < 2 {
        return Some(format!("{label} must be at least 2 characters"));
    }
    if length > 50 {
        return Some(format!("{label} must not exceed 50 characters"));
    }
    if !person_name_re().is_match(value) {
        return Some(format!(
            "{label} can only contain letters, spaces, hyphens, and apostrophes"
        ));
    }
    None
}

fn registration_password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".into());
    }
    let length = password.chars().count();
    if length < 8 {
        return Some("Password must be at least 8 characters".into());
    }
    if length > 128 {
        return Some("Password must not exceed 128 characters".into());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter".into());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter".into());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".into());
    }
    // Special means anything outside ASCII alphanumerics.
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some("Password must contain at least one special character".into());
    }
    None
}

// =============================================================================
// PASSWORD FLOWS
// =============================================================================

pub fn validate_reset_password(password: &str, confirm_password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if password.is_empty() {
        errors.insert("password", "New password is required".into());
    } else if password.chars().count() < 8 {
        errors.insert("password", "Password must be at least 8 characters".into());
    }

    if confirm_password.is_empty() {
        errors.insert("confirmPassword", "Confirm password is required".into());
    } else if confirm_password != password {
        errors.insert("confirmPassword", "Passwords must match".into());
    }

    errors
}

pub fn validate_change_password(dto: &ChangePasswordDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.current_password.trim().is_empty() {
        errors.insert("currentPassword", "Enter your current password.".into());
    }

    let length = dto.new_password.chars().count();
    if !(8..=72).contains(&length) {
        errors.insert("newPassword", "New password must be 8-72 characters.".into());
    } else if dto.new_password == dto.current_password {
        errors.insert("newPassword", "New password must differ from the current one.".into());
    }

    if dto.confirm_new_password != dto.new_password {
        errors.insert("confirmNewPassword", "Passwords do not match.".into());
    }

    errors
}

// =============================================================================
// PROJECTS
// =============================================================================

pub fn validate_project(dto: &CreateProjectDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.title.is_empty() {
        errors.insert("title", "Title is required".into());
    } else if !capitalized_re().is_match(&dto.title) {
        errors.insert("title", "Title must start with a capital letter".into());
    }

    if dto.description.is_empty() {
        errors.insert("description", "Description is required".into());
    } else if !capitalized_re().is_match(&dto.description) {
        errors.insert("description", "Description must start with a capital letter".into());
    }

    errors
}

// =============================================================================
// PROFILE
// =============================================================================

/// Strip anything tag-shaped from free-form bio text.
#[must_use]
pub fn sanitize_bio(bio: &str) -> String {
    html_tag_re().replace_all(bio, "").into_owned()
}

pub fn validate_profile(details: &UserDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) =
        profile_text_error(details.display_name.as_deref(), "Display name", 50)
    {
        errors.insert("displayName", message);
    }

    let email = details.email.trim();
    if email.is_empty() {
        errors.insert("email", "Email is required.".into());
    } else if email.chars().count() > 100 {
        errors.insert("email", "Maximum length is 100.".into());
    } else if !email_re().is_match(email) {
        errors.insert("email", "Invalid email format.".into());
    }

    if let Some(message) = profile_text_error(details.position.as_deref(), "Position", 100) {
        errors.insert("position", message);
    }
    if let Some(message) = profile_text_error(details.department.as_deref(), "Department", 100) {
        errors.insert("department", message);
    }

    if !is_valid_avatar_url(details.avatar_url.as_deref()) {
        errors.insert("avatarUrl", "Provide a valid image URL (jpg, jpeg, png, webp).".into());
    }

    let bio = sanitize_bio(details.bio.as_deref().unwrap_or_default());
    if bio.chars().count() > 500 {
        errors.insert("bio", "Maximum length is 500.".into());
    }

    errors
}

fn profile_text_error(value: Option<&str>, label: &str, max: usize) -> Option<String> {
    let value = value.unwrap_or_default().trim();
    if value.is_empty() {
        return Some(format!("{label} is required."));
    }
    let length = value.chars().count();
    if length < 2 {
        return Some("Minimum length is 2.".into());
    }
    if length > max {
        return Some(format!("Maximum length is {max}."));
    }
    if !profile_text_re().is_match(value) {
        return Some("Only letters, digits, spaces and hyphens are allowed.".into());
    }
    None
}

/// Avatar URLs are optional, but a supplied one must be http(s) with a host
/// and an image-extension path.
fn is_valid_avatar_url(url: Option<&str>) -> bool {
    let Some(url) = url.filter(|u| !u.is_empty()) else {
        return true;
    };

    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    let Some(rest) = rest else {
        return false;
    };

    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    if host.is_empty() {
        return false;
    }

    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    image_ext_re().is_match(path)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
