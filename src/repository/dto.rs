//! Wire response shapes. Private to the repository layer; only domain
//! models cross the boundary.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::auth::TokenPair;
use crate::domain::{Folder, FolderList, Link, Tag, Thumbnail};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FolderDto {
    pub id: String,
    pub title: String,
    pub background_color: String,
    pub title_color: String,
    #[serde(default)]
    pub illustration: Option<String>,
    pub link_count: u64,
    pub is_default: bool,
}

impl FolderDto {
    pub fn into_domain(self) -> Folder {
        Folder {
            id: self.id,
            title: self.title,
            background_color: self.background_color,
            title_color: self.title_color,
            illustration: self.illustration,
            link_count: self.link_count,
            is_default: self.is_default,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FolderListResponse {
    #[serde(default)]
    pub link_books: Vec<FolderDto>,
    #[serde(default)]
    pub total_link_count: u64,
}

impl FolderListResponse {
    pub fn into_domain(self) -> FolderList {
        FolderList {
            folders: self.link_books.into_iter().map(FolderDto::into_domain).collect(),
            total_link_count: self.total_link_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinkDto {
    pub id: String,
    pub link_book_id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "thumbnailURL", default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// ISO-8601 with milliseconds and offset.
    pub created_at: DateTime<FixedOffset>,
    #[serde(default)]
    pub read_count: u64,
}

impl LinkDto {
    pub fn into_domain(self) -> Link {
        Link {
            id: self.id,
            link_book_id: self.link_book_id,
            title: self.title,
            url: self.url,
            thumbnail_url: self.thumbnail_url,
            tags: self.tags,
            created_at: self.created_at,
            read_count: self.read_count,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThumbnailResponse {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "thumbnailURL", default)]
    pub thumbnail_url: Option<String>,
}

impl ThumbnailResponse {
    pub fn into_domain(self) -> Thumbnail {
        Thumbnail {
            title: self.title,
            url: self.url,
            image_url: self.thumbnail_url,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

impl TokenResponse {
    pub fn into_domain(self) -> TokenPair {
        TokenPair::new(self.access_token, self.refresh_token)
    }
}
