//! The login screen: social-token exchange and the sign-up branch.

mod reactor;
mod state;

pub use reactor::LoginReactor;
pub use state::{LoginAction, LoginMutation, LoginPulse, LoginState};
