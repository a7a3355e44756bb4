use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;

use crate::mvi::reactor::Reactor;

/// Channel handed to [`Reactor::mutate`] for emitting mutations.
///
/// Sending never blocks. If the owning store has been torn down the
/// mutation is silently dropped.
pub struct MutationSink<M> {
    tx: mpsc::UnboundedSender<M>,
}

impl<M> MutationSink<M> {
    pub fn send(&self, mutation: M) {
        let _ = self.tx.send(mutation);
    }
}

impl<M> Clone for MutationSink<M> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// The state container driving one feature.
///
/// Each store owns a driver task. Dispatched actions spawn their
/// `mutate` futures concurrently; every mutation they emit funnels
/// through a single ordered channel into a serialized reduce step, so
/// state transitions never interleave even when two actions' async work
/// overlaps. When two actions race, mutations are reduced in the order
/// they arrive (first-completed-first-reduced), not dispatch order;
/// only the transition function itself is order-consistent.
///
/// In-flight repository calls are not cancelled when a newer action of
/// the same kind lands; later mutations simply overwrite state
/// (last-write-wins). Dropping the store aborts the driver.
pub struct Store<R: Reactor> {
    actions: mpsc::UnboundedSender<R::Action>,
    state: watch::Receiver<R::State>,
    pulses: broadcast::Sender<R::Pulse>,
    driver: JoinHandle<()>,
}

impl<R: Reactor> Store<R> {
    /// Spawn the driver for `reactor`. Must be called inside a tokio
    /// runtime.
    pub fn new(reactor: R) -> Self {
        let reactor = Arc::new(reactor);
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<R::Action>();
        let (mutation_tx, mut mutation_rx) = mpsc::unbounded_channel::<R::Mutation>();
        let (state_tx, state_rx) = watch::channel(reactor.initial_state());
        let (pulse_tx, _) = broadcast::channel(64);
        let pulses = pulse_tx.clone();

        let driver = tokio::spawn(async move {
            loop {
                tokio::select! {
                    // Drain ready mutations before taking new actions so
                    // reduction stays strictly in arrival order.
                    biased;
                    Some(mutation) = mutation_rx.recv() => {
                        let pulse = R::pulse(&mutation);
                        let next = R::reduce(state_tx.borrow().clone(), mutation);
                        let _ = state_tx.send(next);
                        if let Some(pulse) = pulse {
                            // Err means no live subscriber; pulses are
                            // never replayed, so that is fine.
                            let _ = pulse_tx.send(pulse);
                        }
                    }
                    action = action_rx.recv() => {
                        let Some(action) = action else { break };
                        let snapshot = state_tx.borrow().clone();
                        let sink = MutationSink { tx: mutation_tx.clone() };
                        tokio::spawn(reactor.mutate(action, snapshot, sink));
                    }
                }
            }
        });

        Self {
            actions: action_tx,
            state: state_rx,
            pulses,
            driver,
        }
    }

    /// Enqueue an action. Never blocks; effects are asynchronous.
    pub fn dispatch(&self, action: R::Action) {
        if self.actions.send(action).is_err() {
            tracing::warn!("store driver gone, action dropped");
        }
    }

    /// Synchronous snapshot reflecting the last applied mutation.
    pub fn current_state(&self) -> R::State {
        self.state.borrow().clone()
    }

    /// Live state sequence. A new subscriber immediately observes the
    /// current state via `borrow`, then every subsequent state via
    /// `changed`.
    pub fn observe_state(&self) -> watch::Receiver<R::State> {
        self.state.clone()
    }

    /// Live pulse sequence. Each emission is delivered to subscribers
    /// that exist at that moment, at most once; late subscribers never
    /// see past pulses.
    pub fn observe_pulses(&self) -> broadcast::Receiver<R::Pulse> {
        self.pulses.subscribe()
    }
}

impl<R: Reactor> Drop for Store<R> {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
