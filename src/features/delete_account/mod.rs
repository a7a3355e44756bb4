//! The account deletion confirmation screen.

mod reactor;
mod state;

pub use reactor::DeleteAccountReactor;
pub use state::{DeleteAccountAction, DeleteAccountMutation, DeleteAccountPulse, DeleteAccountState};
