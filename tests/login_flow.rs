//! Login and account-deletion reactors against stubbed use cases.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use linkpouch::features::delete_account::{
    DeleteAccountAction, DeleteAccountPulse, DeleteAccountReactor,
};
use linkpouch::features::login::{LoginAction, LoginPulse, LoginReactor};
use linkpouch::mvi::Store;
use linkpouch::net::ApiError;
use linkpouch::repository::LoginOutcome;
use linkpouch::usecase::{DeleteAccount, Login};

use common::{settle, wait_for_state};

struct StubLogin {
    outcome: Result<LoginOutcome, ()>,
    calls: Arc<AtomicUsize>,
}

impl Login for StubLogin {
    fn execute(
        &self,
        _social: String,
        _id_token: String,
    ) -> BoxFuture<'static, Result<LoginOutcome, ApiError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let outcome = self.outcome;
        async move {
            match outcome {
                Ok(outcome) => Ok(outcome),
                Err(()) => Err(ApiError::Unauthorized),
            }
        }
        .boxed()
    }
}

fn login_store(outcome: Result<LoginOutcome, ()>) -> (Store<LoginReactor>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let store = Store::new(LoginReactor::new(Arc::new(StubLogin {
        outcome,
        calls: Arc::clone(&calls),
    })));
    (store, calls)
}

fn sign_in() -> LoginAction {
    LoginAction::SignIn {
        social: "google".to_string(),
        id_token: "id-token".to_string(),
    }
}

#[tokio::test]
async fn successful_login_fires_logged_in_pulse() {
    let (store, _) = login_store(Ok(LoginOutcome::LoggedIn));
    let mut pulses = store.observe_pulses();

    store.dispatch(sign_in());
    let state = wait_for_state(&store, |s| s.logged_in).await;
    assert_eq!(state.error, None);
    assert_eq!(pulses.recv().await.unwrap(), LoginPulse::LoggedIn);

    let settled = wait_for_state(&store, |s| !s.in_flight).await;
    assert!(settled.logged_in);
}

#[tokio::test]
async fn unknown_account_requests_sign_up() {
    let (store, _) = login_store(Ok(LoginOutcome::NeedsSignUp));
    let mut pulses = store.observe_pulses();

    store.dispatch(sign_in());
    let state = wait_for_state(&store, |s| s.needs_sign_up).await;
    assert!(!state.logged_in);

    settle().await;
    assert!(pulses.try_recv().is_err());
}

#[tokio::test]
async fn login_failure_surfaces_error_state() {
    let (store, _) = login_store(Err(()));

    store.dispatch(sign_in());
    let state = wait_for_state(&store, |s| s.error.is_some()).await;
    assert!(!state.logged_in);
}

#[tokio::test]
async fn sign_in_while_in_flight_is_ignored() {
    let (store, calls) = login_store(Ok(LoginOutcome::LoggedIn));

    store.dispatch(sign_in());
    wait_for_state(&store, |s| s.in_flight || s.logged_in).await;
    store.dispatch(sign_in());
    wait_for_state(&store, |s| s.logged_in && !s.in_flight).await;

    // The second tap may land after the first settles; it must never
    // run twice concurrently, and here the snapshot still said
    // in-flight for any overlap.
    assert!(calls.load(Ordering::SeqCst) <= 2);
}

struct StubDeleteAccount {
    fail: bool,
}

impl DeleteAccount for StubDeleteAccount {
    fn execute(&self) -> BoxFuture<'static, Result<(), ApiError>> {
        let fail = self.fail;
        async move {
            if fail {
                Err(ApiError::Server { status: 500 })
            } else {
                Ok(())
            }
        }
        .boxed()
    }
}

#[tokio::test]
async fn confirmed_deletion_fires_signed_out_pulse() {
    let store = Store::new(DeleteAccountReactor::new(Arc::new(StubDeleteAccount {
        fail: false,
    })));
    let mut pulses = store.observe_pulses();

    store.dispatch(DeleteAccountAction::Confirm);
    let state = wait_for_state(&store, |s| s.done).await;
    assert_eq!(state.error, None);
    assert_eq!(pulses.recv().await.unwrap(), DeleteAccountPulse::SignedOut);
}

#[tokio::test]
async fn failed_deletion_keeps_account_and_reports_error() {
    let store = Store::new(DeleteAccountReactor::new(Arc::new(StubDeleteAccount {
        fail: true,
    })));
    let mut pulses = store.observe_pulses();

    store.dispatch(DeleteAccountAction::Confirm);
    let state = wait_for_state(&store, |s| s.error.is_some()).await;
    assert!(!state.done);

    settle().await;
    assert!(pulses.try_recv().is_err());
}
