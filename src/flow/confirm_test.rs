use super::*;
use crate::net::test_helpers::{MockApi, request_error};
use std::sync::atomic::Ordering;
use std::time::Duration;

#[tokio::test]
async fn missing_code_fails_without_network_call() {
    let api = MockApi::new();
    let flow = ConfirmFlow::new();

    flow.run(&api, None).await;

    assert_eq!(flow.state(), ConfirmState::Failed);
    assert_eq!(api.confirm_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_code_fails_without_network_call() {
    let api = MockApi::new();
    let flow = ConfirmFlow::new();

    flow.run(&api, Some("")).await;

    assert_eq!(flow.state(), ConfirmState::Failed);
    assert_eq!(api.confirm_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn valid_code_confirms() {
    let api = MockApi::new();
    api.queue_confirm(Ok(()));
    let flow = ConfirmFlow::new();

    flow.run(&api, Some("abc123")).await;

    assert!(flow.is_confirmed());
    assert_eq!(api.confirm_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_code_fails() {
    let api = MockApi::new();
    api.queue_confirm(Err(request_error(410, Some("code expired"), None)));
    let flow = ConfirmFlow::new();

    flow.run(&api, Some("abc123")).await;

    assert_eq!(flow.state(), ConfirmState::Failed);
}

#[tokio::test]
async fn settled_flow_is_not_restartable() {
    let api = MockApi::new();
    api.queue_confirm(Ok(()));
    api.queue_confirm(Ok(()));
    let flow = ConfirmFlow::new();

    flow.run(&api, Some("abc123")).await;
    flow.run(&api, Some("abc123")).await;

    assert_eq!(api.confirm_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancelled_flow_discards_late_outcome() {
    let api = std::sync::Arc::new(MockApi::new());
    api.queue_confirm(Ok(()));
    *api.confirm_delay.lock().unwrap() = Some(Duration::from_millis(50));
    let flow = std::sync::Arc::new(ConfirmFlow::new());

    let handle = spawn_confirm(flow.clone(), api.clone(), Some("abc123".into()));
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(flow.state(), ConfirmState::Loading);

    flow.cancel();
    handle.await.unwrap();

    // The call resolved successfully, but the torn-down flow never moved.
    assert_eq!(flow.state(), ConfirmState::Loading);
    assert_eq!(api.confirm_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn cancel_is_idempotent() {
    let flow = ConfirmFlow::new();
    flow.cancel();
    flow.cancel();
    assert_eq!(flow.state(), ConfirmState::Idle);
}
