//! Ordering and delivery guarantees of the state-container engine.

mod common;

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use linkpouch::mvi::{MutationSink, Reactor, Store};

use common::wait_for_state;

/// Test reactor whose state is the log of every reduced value, making
/// reduction order directly observable.
struct RecorderReactor;

#[derive(Debug, Clone)]
enum RecorderAction {
    /// Emit values immediately, in order.
    Emit(Vec<u32>),
    /// Emit one value after a delay.
    EmitAfter(Duration, u32),
    /// Emit a value that also fires a pulse.
    Ping(u32),
}

#[derive(Debug, Clone)]
enum RecorderMutation {
    Push(u32),
    Ping(u32),
}

impl Reactor for RecorderReactor {
    type Action = RecorderAction;
    type Mutation = RecorderMutation;
    type State = Vec<u32>;
    type Pulse = u32;

    fn initial_state(&self) -> Vec<u32> {
        Vec::new()
    }

    fn mutate(
        &self,
        action: RecorderAction,
        _state: Vec<u32>,
        sink: MutationSink<RecorderMutation>,
    ) -> BoxFuture<'static, ()> {
        match action {
            RecorderAction::Emit(values) => async move {
                for value in values {
                    sink.send(RecorderMutation::Push(value));
                }
            }
            .boxed(),
            RecorderAction::EmitAfter(delay, value) => async move {
                tokio::time::sleep(delay).await;
                sink.send(RecorderMutation::Push(value));
            }
            .boxed(),
            RecorderAction::Ping(value) => async move {
                sink.send(RecorderMutation::Ping(value));
            }
            .boxed(),
        }
    }

    fn reduce(mut state: Vec<u32>, mutation: RecorderMutation) -> Vec<u32> {
        match mutation {
            RecorderMutation::Push(value) | RecorderMutation::Ping(value) => state.push(value),
        }
        state
    }

    fn pulse(mutation: &RecorderMutation) -> Option<u32> {
        match mutation {
            RecorderMutation::Ping(value) => Some(*value),
            RecorderMutation::Push(_) => None,
        }
    }
}

#[tokio::test]
async fn reduction_preserves_per_action_emission_order() {
    let store = Store::new(RecorderReactor);
    store.dispatch(RecorderAction::Emit(vec![1, 2, 3]));
    store.dispatch(RecorderAction::Emit(vec![4, 5, 6]));

    let state = wait_for_state(&store, |s| s.len() == 6).await;

    // Concurrent actions may interleave, but each action's own
    // mutations stay in emission order.
    let first: Vec<u32> = state.iter().copied().filter(|v| *v <= 3).collect();
    let second: Vec<u32> = state.iter().copied().filter(|v| *v > 3).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![4, 5, 6]);
}

#[tokio::test]
async fn first_completed_action_reduces_first() {
    let store = Store::new(RecorderReactor);
    // Dispatched first, completes second.
    store.dispatch(RecorderAction::EmitAfter(Duration::from_millis(80), 1));
    store.dispatch(RecorderAction::EmitAfter(Duration::from_millis(10), 2));

    let state = wait_for_state(&store, |s| s.len() == 2).await;
    assert_eq!(state, vec![2, 1]);
}

#[tokio::test]
async fn current_state_reflects_fold_of_reduced_mutations() {
    let store = Store::new(RecorderReactor);
    store.dispatch(RecorderAction::Emit(vec![10, 20]));

    let observed = wait_for_state(&store, |s| s.len() == 2).await;
    assert_eq!(store.current_state(), observed);
    assert_eq!(observed, vec![10, 20]);
}

#[tokio::test]
async fn observe_state_replays_latest_to_new_subscribers() {
    let store = Store::new(RecorderReactor);
    store.dispatch(RecorderAction::Emit(vec![7]));
    wait_for_state(&store, |s| s.len() == 1).await;

    // A subscriber attached now sees the current state immediately.
    let rx = store.observe_state();
    assert_eq!(*rx.borrow(), vec![7]);
}

#[tokio::test]
async fn pulse_delivered_exactly_once_to_live_subscriber() {
    let store = Store::new(RecorderReactor);
    let mut pulses = store.observe_pulses();

    store.dispatch(RecorderAction::Ping(9));
    wait_for_state(&store, |s| s.len() == 1).await;

    assert_eq!(pulses.recv().await.unwrap(), 9);
    assert!(matches!(
        pulses.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

#[tokio::test]
async fn pulse_not_replayed_to_late_subscribers() {
    let store = Store::new(RecorderReactor);

    store.dispatch(RecorderAction::Ping(3));
    wait_for_state(&store, |s| s.len() == 1).await;

    // Attached after the emission: sees nothing from the past.
    let mut late = store.observe_pulses();
    assert!(matches!(
        late.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));

    // But does see the next emission, exactly once.
    store.dispatch(RecorderAction::Ping(4));
    wait_for_state(&store, |s| s.len() == 2).await;
    assert_eq!(late.recv().await.unwrap(), 4);
}

#[tokio::test]
async fn dispatch_does_not_block_while_work_is_in_flight() {
    let store = Store::new(RecorderReactor);
    store.dispatch(RecorderAction::EmitAfter(Duration::from_millis(200), 1));

    // A second action lands and reduces while the first is suspended.
    store.dispatch(RecorderAction::Emit(vec![2]));
    let state = wait_for_state(&store, |s| !s.is_empty()).await;
    assert_eq!(state, vec![2]);

    let state = wait_for_state(&store, |s| s.len() == 2).await;
    assert_eq!(state, vec![2, 1]);
}
