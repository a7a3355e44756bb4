use chrono::{DateTime, FixedOffset};

/// Tags are plain strings on the wire and in the domain.
pub type Tag = String;

/// A saved link inside a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: String,
    pub link_book_id: String,
    pub title: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<FixedOffset>,
    pub read_count: u64,
}

/// Page metadata scraped for a URL before saving it as a link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Thumbnail {
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
}
