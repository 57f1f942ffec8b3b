use super::*;
use crate::net::test_helpers::{MockApi, dummy_user, request_error};
use crate::net::types::{ApiError, RegistrationResponse};
use std::time::Duration;

fn credentials() -> Credentials {
    Credentials { email: "ana@example.com".into(), password: "Passw0rd!".into() }
}

fn registration_dto(first: &str, last: &str) -> RegistrationDto {
    RegistrationDto {
        email: "ana@example.com".into(),
        password: "Passw0rd!".into(),
        first_name: first.into(),
        last_name: last.into(),
    }
}

// =============================================================================
// Pure reducers
// =============================================================================

#[test]
fn login_pending_clears_error_and_flag() {
    let mut state = AuthState {
        authenticated: true,
        login_error: Some("old".into()),
        ..AuthState::default()
    };
    state.login_pending();
    assert!(!state.authenticated);
    assert!(state.login_error.is_none());
}

#[test]
fn login_fulfilled_sets_user_and_flag() {
    let mut state = AuthState::default();
    state.login_fulfilled(dummy_user());
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(7));
    assert!(state.login_error.is_none());
}

#[test]
fn login_rejected_clears_user() {
    let mut state = AuthState::default();
    state.login_fulfilled(dummy_user());
    state.login_rejected("Bad credentials".into());
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(state.login_error.as_deref(), Some("Bad credentials"));
}

#[test]
fn register_pending_clears_both_messages() {
    let mut state = AuthState {
        registration_error: Some("old error".into()),
        registration_success: Some("old success".into()),
        ..AuthState::default()
    };
    state.register_pending();
    assert!(state.registration_error.is_none());
    assert!(state.registration_success.is_none());
}

#[test]
fn register_fulfilled_greets_with_both_names() {
    let mut state = AuthState::default();
    state.register_fulfilled(None, "Ana", "Lee");
    assert_eq!(
        state.registration_success.as_deref(),
        Some("Hello Ana Lee! Registration successful! Please check your email to confirm your account."),
    );
    assert!(!state.authenticated);
    assert!(state.user.is_none());
}

#[test]
fn register_fulfilled_greets_with_single_name() {
    let mut state = AuthState::default();
    state.register_fulfilled(None, "Ana", "");
    assert_eq!(
        state.registration_success.as_deref(),
        Some("Hello Ana! Registration successful! Please check your email to confirm your account."),
    );

    state.register_fulfilled(None, "", "Lee");
    assert_eq!(
        state.registration_success.as_deref(),
        Some("Hello Lee! Registration successful! Please check your email to confirm your account."),
    );
}

#[test]
fn register_fulfilled_without_names_has_no_greeting() {
    let mut state = AuthState::default();
    state.register_fulfilled(None, "", "");
    assert_eq!(
        state.registration_success.as_deref(),
        Some("Registration successful! Please check your email to confirm your account."),
    );
}

#[test]
fn register_fulfilled_with_user_opens_session() {
    let mut state = AuthState::default();
    state.register_fulfilled(Some(dummy_user()), "Ana", "Lee");
    assert!(state.authenticated);
    assert!(state.user.is_some());
    assert!(state.registration_error.is_none());
}

#[test]
fn register_rejected_clears_success() {
    let mut state = AuthState::default();
    state.register_fulfilled(Some(dummy_user()), "Ana", "Lee");
    state.register_rejected("Email already registered".into());
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.registration_success.is_none());
    assert_eq!(state.registration_error.as_deref(), Some("Email already registered"));
}

// =============================================================================
// Store: login
// =============================================================================

#[tokio::test]
async fn login_success_updates_state() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_login(Ok(dummy_user()));
    let store = AuthStore::new(api);

    assert!(store.login(credentials()).await);

    let state = store.snapshot().await;
    assert!(state.authenticated);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("ana@example.com"));
    assert!(state.login_error.is_none());
}

#[tokio::test]
async fn login_failure_extracts_body_message() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_login(Err(request_error(401, Some("Bad credentials"), None)));
    let store = AuthStore::new(api);

    assert!(!store.login(credentials()).await);

    let state = store.snapshot().await;
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(state.login_error.as_deref(), Some("Bad credentials"));
}

#[tokio::test]
async fn login_transport_failure_uses_network_fallback() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_login(Err(ApiError::Transport("dns".into())));
    let store = AuthStore::new(api);

    store.login(credentials()).await;
    let state = store.snapshot().await;
    assert_eq!(state.login_error.as_deref(), Some("Network error or server is unavailable"));
}

#[tokio::test]
async fn racing_logins_settle_last_applied_wins() {
    let api = std::sync::Arc::new(MockApi::new());
    // First dispatch resolves slowly with a success, second fails fast; the
    // slow success applies last and wins.
    api.queue_login(Ok(dummy_user()));
    api.queue_login(Err(request_error(401, Some("Bad credentials"), None)));
    api.login_delays
        .lock()
        .unwrap()
        .push_back(Duration::from_millis(50));
    let store = AuthStore::new(api);

    let slow = tokio::spawn({
        let store = store.clone();
        async move { store.login(credentials()).await }
    });
    tokio::time::sleep(Duration::from_millis(10)).await;
    let fast = store.login(credentials()).await;
    assert!(!fast);
    assert!(slow.await.unwrap());

    let state = store.snapshot().await;
    assert!(state.authenticated);
    assert!(state.user.is_some());
}

// =============================================================================
// Store: register / logout
// =============================================================================

#[tokio::test]
async fn register_success_without_user_stays_anonymous() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_register(Ok(RegistrationResponse::default()));
    let store = AuthStore::new(api);

    store.register(registration_dto("Ana", "Lee")).await;

    let state = store.snapshot().await;
    assert!(!state.authenticated);
    assert!(state.registration_success.is_some());
    assert!(state.registration_error.is_none());
}

#[tokio::test]
async fn register_failure_prefers_error_field_when_no_message() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_register(Err(request_error(409, None, Some("duplicate email"))));
    let store = AuthStore::new(api);

    store.register(registration_dto("Ana", "Lee")).await;

    let state = store.snapshot().await;
    assert_eq!(state.registration_error.as_deref(), Some("duplicate email"));
    assert!(state.registration_success.is_none());
}

#[tokio::test]
async fn logout_resets_state_even_when_request_fails() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_login(Ok(dummy_user()));
    // logout queue left empty: the mock yields a transport error.
    let store = AuthStore::new(api);

    store.login(credentials()).await;
    store.logout().await;

    assert_eq!(store.snapshot().await, AuthState::default());
}
