use crate::domain::{Link, Tag};

#[derive(Debug, Clone)]
pub enum LinkDetailAction {
    ViewDidLoad,
    UpdateTags(Vec<Tag>),
    DeleteLink,
}

#[derive(Debug, Clone)]
pub enum LinkDetailMutation {
    SetTagList(Vec<Tag>),
    SetLink(Link),
    SetDeleted,
    SetError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDetailPulse {
    /// The link is gone; the adapter should close the screen.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkDetailState {
    pub link: Link,
    /// Every tag the account has used, for the tag picker.
    pub all_tags: Vec<Tag>,
    pub deleted: bool,
    pub error: Option<String>,
}

impl LinkDetailState {
    pub fn new(link: Link) -> Self {
        Self {
            link,
            all_tags: Vec::new(),
            deleted: false,
            error: None,
        }
    }
}
