use futures::future::BoxFuture;

use crate::mvi::store::MutationSink;

/// Behavior of one feature: how actions become mutations and how
/// mutations become state.
///
/// A reactor is owned by exactly one [`Store`](crate::mvi::Store). All
/// side effects (repository calls) live inside [`mutate`]; [`reduce`]
/// must be a pure function with no async work.
///
/// [`mutate`]: Reactor::mutate
/// [`reduce`]: Reactor::reduce
pub trait Reactor: Send + Sync + 'static {
    /// External intent event fed into the store.
    type Action: Send + 'static;

    /// Internal state-delta event produced only by `mutate`.
    type Mutation: Send + 'static;

    /// The snapshot published to observers.
    type State: Clone + Send + Sync + 'static;

    /// Transient one-shot signal classified from mutations.
    type Pulse: Clone + Send + 'static;

    /// The fixed default state a fresh store starts from.
    fn initial_state(&self) -> Self::State;

    /// Turn an action into an asynchronous stream of mutations.
    ///
    /// `state` is the snapshot at dispatch time. Emit mutations through
    /// `sink` as they become ready; multiple actions' futures run
    /// concurrently. Failures must be handled here, mapped to an
    /// error-carrying mutation or absorbed, so that no failure ever
    /// terminates the store.
    fn mutate(
        &self,
        action: Self::Action,
        state: Self::State,
        sink: MutationSink<Self::Mutation>,
    ) -> BoxFuture<'static, ()>;

    /// Apply one mutation. Pure; called serially per store in mutation
    /// arrival order.
    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State;

    /// Which mutations additionally fire a pulse. Pure; the default
    /// fires none.
    fn pulse(_mutation: &Self::Mutation) -> Option<Self::Pulse> {
        None
    }
}
