//! The link detail screen: tag editing and deletion for one link.

mod reactor;
mod state;

pub use reactor::LinkDetailReactor;
pub use state::{LinkDetailAction, LinkDetailMutation, LinkDetailPulse, LinkDetailState};
