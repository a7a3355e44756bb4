//! Domain models returned by the repository layer.
//!
//! These are plain value types decoded from wire DTOs. No domain object
//! is shared mutably across stores; each repository call produces fresh
//! values owned by whichever mutation or state carries them.

mod folder;
mod link;

pub use folder::{Folder, FolderList, SortMode};
pub use link::{Link, Tag, Thumbnail};
