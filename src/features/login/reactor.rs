use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::features::login::state::{LoginAction, LoginMutation, LoginPulse, LoginState};
use crate::mvi::{MutationSink, Reactor};
use crate::repository::LoginOutcome;
use crate::usecase::Login;

pub struct LoginReactor {
    login: Arc<dyn Login>,
}

impl LoginReactor {
    pub fn new(login: Arc<dyn Login>) -> Self {
        Self { login }
    }
}

impl Reactor for LoginReactor {
    type Action = LoginAction;
    type Mutation = LoginMutation;
    type State = LoginState;
    type Pulse = LoginPulse;

    fn initial_state(&self) -> LoginState {
        LoginState::default()
    }

    fn mutate(
        &self,
        action: LoginAction,
        state: LoginState,
        sink: MutationSink<LoginMutation>,
    ) -> BoxFuture<'static, ()> {
        match action {
            LoginAction::SignIn { social, id_token } => {
                if state.in_flight {
                    // A tap while the exchange is running is a no-op.
                    return futures::future::ready(()).boxed();
                }
                let login = Arc::clone(&self.login);
                async move {
                    sink.send(LoginMutation::SetInFlight(true));
                    match login.execute(social, id_token).await {
                        Ok(LoginOutcome::LoggedIn) => sink.send(LoginMutation::SetLoggedIn),
                        Ok(LoginOutcome::NeedsSignUp) => sink.send(LoginMutation::SetNeedsSignUp),
                        Err(err) => {
                            tracing::warn!(kind = err.kind(), "login failed");
                            sink.send(LoginMutation::SetError(err.to_string()));
                        }
                    }
                    sink.send(LoginMutation::SetInFlight(false));
                }
                .boxed()
            }
        }
    }

    fn reduce(mut state: LoginState, mutation: LoginMutation) -> LoginState {
        match mutation {
            LoginMutation::SetInFlight(in_flight) => {
                state.in_flight = in_flight;
            }
            LoginMutation::SetLoggedIn => {
                state.logged_in = true;
                state.error = None;
            }
            LoginMutation::SetNeedsSignUp => {
                state.needs_sign_up = true;
            }
            LoginMutation::SetError(message) => {
                state.error = Some(message);
            }
        }
        state
    }

    fn pulse(mutation: &LoginMutation) -> Option<LoginPulse> {
        match mutation {
            LoginMutation::SetLoggedIn => Some(LoginPulse::LoggedIn),
            _ => None,
        }
    }
}
