use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::domain::{Folder, FolderList, SortMode};
use crate::net::ApiError;
use crate::repository::LinkRepository;

/// Fetch the folder list ordered by a sort mode.
pub trait FetchFolderList: Send + Sync + 'static {
    fn execute(&self, sort: SortMode) -> BoxFuture<'static, Result<FolderList, ApiError>>;
}

pub struct FetchFolderListUseCase {
    repository: Arc<LinkRepository>,
}

impl FetchFolderListUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl FetchFolderList for FetchFolderListUseCase {
    fn execute(&self, sort: SortMode) -> BoxFuture<'static, Result<FolderList, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.fetch_folder_list(sort).await }.boxed()
    }
}

/// Create one folder.
pub trait CreateFolder: Send + Sync + 'static {
    fn execute(
        &self,
        title: String,
        background_color: String,
        title_color: String,
        illustration: Option<String>,
    ) -> BoxFuture<'static, Result<Folder, ApiError>>;
}

pub struct CreateFolderUseCase {
    repository: Arc<LinkRepository>,
}

impl CreateFolderUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl CreateFolder for CreateFolderUseCase {
    fn execute(
        &self,
        title: String,
        background_color: String,
        title_color: String,
        illustration: Option<String>,
    ) -> BoxFuture<'static, Result<Folder, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move {
            repository
                .create_folder(
                    &title,
                    &background_color,
                    &title_color,
                    illustration.as_deref(),
                )
                .await
        }
        .boxed()
    }
}

/// Delete one folder by id.
pub trait DeleteFolder: Send + Sync + 'static {
    fn execute(&self, id: String) -> BoxFuture<'static, Result<(), ApiError>>;
}

pub struct DeleteFolderUseCase {
    repository: Arc<LinkRepository>,
}

impl DeleteFolderUseCase {
    pub fn new(repository: Arc<LinkRepository>) -> Self {
        Self { repository }
    }
}

impl DeleteFolder for DeleteFolderUseCase {
    fn execute(&self, id: String) -> BoxFuture<'static, Result<(), ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.delete_folder(&id).await }.boxed()
    }
}
