use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::domain::Tag;
use crate::net::ApiError;
use crate::repository::LinkRepository;

/// Fetch every tag the account has used.
///
/// Infallible by policy: the repository degrades any failure to an
/// empty list, and this use case passes that through.
pub trait FetchTagList: Send + Sync + 'static {
    fn execute(&self) -> BoxFuture<'static, Vec<Tag>>;
}

pub struct FetchTagListUseCase {
    repository: Arc<LinkRepository>,
}

impl FetchTagListUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl FetchTagList for FetchTagListUseCase {
    fn execute(&self) -> BoxFuture<'static, Vec<Tag>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.fetch_tag_list().await }.boxed()
    }
}

/// Replace the stored tag list.
pub trait UpdateTagList: Send + Sync + 'static {
    fn execute(&self, tags: Vec<Tag>) -> BoxFuture<'static, Result<Vec<Tag>, ApiError>>;
}

pub struct UpdateTagListUseCase {
    repository: Arc<LinkRepository>,
}

impl UpdateTagListUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl UpdateTagList for UpdateTagListUseCase {
    fn execute(&self, tags: Vec<Tag>) -> BoxFuture<'static, Result<Vec<Tag>, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.update_tag_list(&tags).await }.boxed()
    }
}
