//! The folder list screen: ordered folders with an "All" aggregate
//! entry, in-memory search, sortable refresh, and folder deletion.

mod reactor;
mod state;

pub use reactor::FolderListReactor;
pub use state::{FolderListAction, FolderListMutation, FolderListPulse, FolderListState};
