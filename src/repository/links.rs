use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::domain::{Folder, FolderList, Link, SortMode, Tag, Thumbnail};
use crate::net::{ApiError, ApiRequest, Gateway};
use crate::repository::dto::{FolderDto, FolderListResponse, LinkDto, ThumbnailResponse};

/// Characters that cannot appear verbatim in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Data access for folders, links, tags and thumbnails.
pub struct LinkRepository {
    gateway: Arc<Gateway>,
}

impl LinkRepository {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn fetch_folder_list(&self, sort: SortMode) -> Result<FolderList, ApiError> {
        let request = ApiRequest::get("link-books").query("sort", sort.query_value());
        let response: FolderListResponse = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }

    pub async fn create_folder(
        &self,
        title: &str,
        background_color: &str,
        title_color: &str,
        illustration: Option<&str>,
    ) -> Result<Folder, ApiError> {
        let request = ApiRequest::post("link-books").json(serde_json::json!({
            "title": title,
            "backgroundColor": background_color,
            "titleColor": title_color,
            "illustration": illustration,
        }));
        let response: FolderDto = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }

    pub async fn update_folder(
        &self,
        id: &str,
        title: &str,
        background_color: &str,
        title_color: &str,
        illustration: Option<&str>,
    ) -> Result<Folder, ApiError> {
        let request = ApiRequest::put(format!("link-books/{id}")).json(serde_json::json!({
            "title": title,
            "backgroundColor": background_color,
            "titleColor": title_color,
            "illustration": illustration,
        }));
        let response: FolderDto = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }

    pub async fn delete_folder(&self, id: &str) -> Result<(), ApiError> {
        self.gateway
            .call_empty(ApiRequest::delete(format!("link-books/{id}")))
            .await
    }

    pub async fn fetch_link_list(&self, folder_id: Option<&str>) -> Result<Vec<Link>, ApiError> {
        let request = match folder_id {
            Some(id) => ApiRequest::get(format!("link-books/{id}/links")),
            None => ApiRequest::get("links"),
        };
        let response: Vec<LinkDto> = self.gateway.call(request).await?;
        Ok(response.into_iter().map(LinkDto::into_domain).collect())
    }

    pub async fn create_link(
        &self,
        link_book_id: &str,
        title: &str,
        url: &str,
        thumbnail_url: Option<&str>,
        tags: &[Tag],
    ) -> Result<Link, ApiError> {
        let request = ApiRequest::post("links").json(serde_json::json!({
            "linkBookId": link_book_id,
            "title": title,
            "url": url,
            "thumbnailURL": thumbnail_url,
            "tags": tags,
        }));
        let response: LinkDto = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }

    pub async fn update_link(
        &self,
        id: &str,
        title: &str,
        url: &str,
        thumbnail_url: Option<&str>,
        tags: &[Tag],
    ) -> Result<Link, ApiError> {
        let request = ApiRequest::put(format!("links/{id}")).json(serde_json::json!({
            "title": title,
            "url": url,
            "thumbnailURL": thumbnail_url,
            "tags": tags,
        }));
        let response: LinkDto = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }

    /// Move a link into another folder.
    pub async fn move_link(&self, id: &str, folder_id: &str) -> Result<(), ApiError> {
        let request = ApiRequest::put(format!("links/{id}/link-book-id/{folder_id}"));
        self.gateway.call_empty(request).await
    }

    pub async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        self.gateway
            .call_empty(ApiRequest::delete(format!("links/{id}")))
            .await
    }

    /// Non-critical read: any failure degrades to an empty list instead
    /// of propagating.
    pub async fn fetch_tag_list(&self) -> Vec<Tag> {
        match self.gateway.call::<Vec<Tag>>(ApiRequest::get("tags")).await {
            Ok(tags) => tags,
            Err(err) => {
                tracing::debug!(kind = err.kind(), "tag list fetch failed, degrading to empty");
                Vec::new()
            }
        }
    }

    pub async fn update_tag_list(&self, tags: &[Tag]) -> Result<Vec<Tag>, ApiError> {
        let request = ApiRequest::put("tags").json(serde_json::json!(tags));
        self.gateway.call(request).await
    }

    /// Tags are user-entered text, so the path segment is escaped.
    pub async fn delete_tag(&self, tag: &Tag) -> Result<(), ApiError> {
        let segment = utf8_percent_encode(tag, PATH_SEGMENT);
        self.gateway
            .call_empty(ApiRequest::delete(format!("tags/{segment}")))
            .await
    }

    /// Scrape page metadata for a URL before saving it.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Thumbnail, ApiError> {
        let request = ApiRequest::post("thumbnail").json(serde_json::json!({ "url": url }));
        let response: ThumbnailResponse = self.gateway.call(request).await?;
        Ok(response.into_domain())
    }
}
