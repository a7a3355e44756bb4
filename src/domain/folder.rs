/// A folder ("link book") holding saved links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub background_color: String,
    pub title_color: String,
    pub illustration: Option<String>,
    pub link_count: u64,
    pub is_default: bool,
}

impl Folder {
    /// The synthetic "All" aggregate folder, always shown first in the
    /// folder list. Its link count is the total across every folder.
    pub fn all(count: u64) -> Self {
        Self {
            id: String::new(),
            title: "All".to_string(),
            background_color: "#91B0C4".to_string(),
            title_color: "#FFFFFF".to_string(),
            illustration: None,
            link_count: count,
            is_default: true,
        }
    }
}

/// A fetched folder list together with the total link count used to
/// build the "All" aggregate entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolderList {
    pub folders: Vec<Folder>,
    pub total_link_count: u64,
}

/// Sort order applied to every folder-list fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    ByCreation,
    ByName,
    ByLastSaved,
}

impl SortMode {
    /// Query parameter value understood by the remote API.
    pub fn query_value(self) -> &'static str {
        match self {
            SortMode::ByCreation => "created_at",
            SortMode::ByName => "title",
            SortMode::ByLastSaved => "last_saved_at",
        }
    }
}
