//! Capability-scoped use cases.
//!
//! Each trait exposes exactly one asynchronous operation wrapping one
//! repository call: no caching, no retries, success and failure passed
//! through unchanged. Reactors depend on these narrow capabilities
//! instead of the full repository surface, which is also what lets
//! tests substitute stubs.

mod auth;
mod folders;
mod links;
mod tags;

pub use auth::{DeleteAccount, DeleteAccountUseCase, Login, LoginUseCase};
pub use folders::{
    CreateFolder, CreateFolderUseCase, DeleteFolder, DeleteFolderUseCase, FetchFolderList,
    FetchFolderListUseCase,
};
pub use links::{
    DeleteLink, DeleteLinkUseCase, FetchThumbnail, FetchThumbnailUseCase, UpdateLink,
    UpdateLinkUseCase,
};
pub use tags::{FetchTagList, FetchTagListUseCase, UpdateTagList, UpdateTagListUseCase};
