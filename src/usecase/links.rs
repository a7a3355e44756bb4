use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::domain::{Link, Tag, Thumbnail};
use crate::net::ApiError;
use crate::repository::LinkRepository;

/// Replace a link's mutable fields, returning the updated link.
pub trait UpdateLink: Send + Sync + 'static {
    fn execute(&self, link: Link, tags: Vec<Tag>) -> BoxFuture<'static, Result<Link, ApiError>>;
}

pub struct UpdateLinkUseCase {
    repository: Arc<LinkRepository>,
}

impl UpdateLinkUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl UpdateLink for UpdateLinkUseCase {
    fn execute(&self, link: Link, tags: Vec<Tag>) -> BoxFuture<'static, Result<Link, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move {
            repository
                .update_link(
                    &link.id,
                    &link.title,
                    &link.url,
                    link.thumbnail_url.as_deref(),
                    &tags,
                )
                .await
        }
        .boxed()
    }
}

/// Delete one link by id.
pub trait DeleteLink: Send + Sync + 'static {
    fn execute(&self, id: String) -> BoxFuture<'static, Result<(), ApiError>>;
}

pub struct DeleteLinkUseCase {
    repository: Arc<LinkRepository>,
}

impl DeleteLinkUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl DeleteLink for DeleteLinkUseCase {
    fn execute(&self, id: String) -> BoxFuture<'static, Result<(), ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.delete_link(&id).await }.boxed()
    }
}

/// Scrape page metadata for a URL.
pub trait FetchThumbnail: Send + Sync + 'static {
    fn execute(&self, url: String) -> BoxFuture<'static, Result<Thumbnail, ApiError>>;
}

pub struct FetchThumbnailUseCase {
    repository: Arc<LinkRepository>,
}

impl FetchThumbnailUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl FetchThumbnail for FetchThumbnailUseCase {
    fn execute(&self, url: String) -> BoxFuture<'static, Result<Thumbnail, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.fetch_thumbnail(&url).await }.boxed()
    }
}
