use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::features::delete_account::state::{
    DeleteAccountAction, DeleteAccountMutation, DeleteAccountPulse, DeleteAccountState,
};
use crate::mvi::{MutationSink, Reactor};
use crate::usecase::DeleteAccount;

pub struct DeleteAccountReactor {
    delete_account: Arc<dyn DeleteAccount>,
}

impl DeleteAccountReactor {
    pub fn new(delete_account: Arc<dyn DeleteAccount>) -> Self {
        Self { delete_account }
    }
}

impl Reactor for DeleteAccountReactor {
    type Action = DeleteAccountAction;
    type Mutation = DeleteAccountMutation;
    type State = DeleteAccountState;
    type Pulse = DeleteAccountPulse;

    fn initial_state(&self) -> DeleteAccountState {
        DeleteAccountState::default()
    }

    fn mutate(
        &self,
        action: DeleteAccountAction,
        state: DeleteAccountState,
        sink: MutationSink<DeleteAccountMutation>,
    ) -> BoxFuture<'static, ()> {
        match action {
            DeleteAccountAction::Confirm => {
                if state.in_flight || state.done {
                    return futures::future::ready(()).boxed();
                }
                let delete = Arc::clone(&self.delete_account);
                async move {
                    sink.send(DeleteAccountMutation::SetInFlight(true));
                    match delete.execute().await {
                        Ok(()) => sink.send(DeleteAccountMutation::SetDone),
                        Err(err) => {
                            tracing::warn!(kind = err.kind(), "account deletion failed");
                            sink.send(DeleteAccountMutation::SetError(err.to_string()));
                        }
                    }
                    sink.send(DeleteAccountMutation::SetInFlight(false));
                }
                .boxed()
            }
        }
    }

    fn reduce(mut state: DeleteAccountState, mutation: DeleteAccountMutation) -> DeleteAccountState {
        match mutation {
            DeleteAccountMutation::SetInFlight(in_flight) => {
                state.in_flight = in_flight;
            }
            DeleteAccountMutation::SetDone => {
                state.done = true;
                state.error = None;
            }
            DeleteAccountMutation::SetError(message) => {
                state.error = Some(message);
            }
        }
        state
    }

    fn pulse(mutation: &DeleteAccountMutation) -> Option<DeleteAccountPulse> {
        match mutation {
            DeleteAccountMutation::SetDone => Some(DeleteAccountPulse::SignedOut),
            _ => None,
        }
    }
}
