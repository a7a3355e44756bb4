#![allow(dead_code)]

pub mod mock_api;

use std::time::Duration;

use linkpouch::mvi::{Reactor, Store};

/// Wait until the store publishes a state matching `pred`, returning it.
///
/// Panics after two seconds; test stores settle far faster than that.
pub async fn wait_for_state<R, F>(store: &Store<R>, mut pred: F) -> R::State
where
    R: Reactor,
    F: FnMut(&R::State) -> bool,
{
    let mut rx = store.observe_state();
    tokio::time::timeout(Duration::from_secs(2), async move {
        loop {
            let current = rx.borrow_and_update().clone();
            if pred(&current) {
                return current;
            }
            rx.changed().await.expect("store driver gone");
        }
    })
    .await
    .expect("timed out waiting for state")
}

/// Give in-flight mutate tasks a moment to settle without a predicate.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
