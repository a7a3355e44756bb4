use crate::domain::{Folder, SortMode};

/// User and lifecycle intents for the folder list screen.
#[derive(Debug, Clone)]
pub enum FolderListAction {
    ViewDidLoad,
    Refresh,
    SearchText(String),
    /// A folder was created elsewhere; re-fetch with the active sort.
    CreateFolderSucceed,
    DeleteFolder(String),
    UpdateSort(SortMode),
}

/// Internal state deltas. Never crosses the store boundary.
#[derive(Debug, Clone)]
pub enum FolderListMutation {
    SetFolderList(Vec<Folder>),
    SetVisible(Vec<Folder>),
    SetSortMode(SortMode),
    SetEndRefreshing,
    SetError(String),
}

/// One-shot signals for the presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderListPulse {
    /// The pull-to-refresh spinner should stop.
    EndRefreshing,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FolderListState {
    /// Full list including the "All" aggregate at index 0.
    pub folders: Vec<Folder>,
    /// Search-filtered view of `folders`.
    pub visible: Vec<Folder>,
    pub sort: SortMode,
    pub error: Option<String>,
}
