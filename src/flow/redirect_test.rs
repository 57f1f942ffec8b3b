use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
    let fired = Arc::new(AtomicUsize::new(0));
    let hook = {
        let fired = fired.clone();
        move || {
            fired.fetch_add(1, Ordering::SeqCst);
        }
    };
    (fired, hook)
}

#[tokio::test]
async fn fires_once_after_delay() {
    let countdown = RedirectCountdown::new();
    let (fired, hook) = counter();

    countdown.arm(Duration::from_millis(10), hook);
    assert!(countdown.is_armed());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!countdown.is_armed());
}

#[tokio::test]
async fn cancel_prevents_firing() {
    let countdown = RedirectCountdown::new();
    let (fired, hook) = counter();

    countdown.arm(Duration::from_millis(10), hook);
    countdown.cancel();

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(countdown.is_cancelled());
}

#[tokio::test]
async fn cancel_is_idempotent_and_blocks_rearming() {
    let countdown = RedirectCountdown::new();
    countdown.cancel();
    countdown.cancel();

    let (fired, hook) = counter();
    countdown.arm(Duration::from_millis(10), hook);
    assert!(!countdown.is_armed());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn arm_while_armed_is_a_no_op() {
    let countdown = RedirectCountdown::new();
    let (first_fired, first_hook) = counter();
    let (second_fired, second_hook) = counter();

    countdown.arm(Duration::from_millis(10), first_hook);
    countdown.arm(Duration::from_millis(10), second_hook);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(first_fired.load(Ordering::SeqCst), 1);
    assert_eq!(second_fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn reset_allows_a_fresh_cycle_after_cancel() {
    let countdown = RedirectCountdown::new();
    countdown.cancel();
    countdown.reset();
    assert!(!countdown.is_cancelled());

    let (fired, hook) = counter();
    countdown.arm(Duration::from_millis(10), hook);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn disarm_stops_timer_without_cancelling() {
    let countdown = RedirectCountdown::new();
    let (fired, hook) = counter();

    countdown.arm(Duration::from_millis(10), hook);
    countdown.disarm();
    assert!(!countdown.is_cancelled());

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    // Teardown is not "stay on page": a later success may arm again.
    let (fired, hook) = counter();
    countdown.arm(Duration::from_millis(10), hook);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
