use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::net::ApiError;
use crate::repository::{AuthRepository, LoginOutcome};

/// Exchange a social-provider identity token for stored credentials.
pub trait Login: Send + Sync + 'static {
    fn execute(
        &self,
        social: String,
        id_token: String,
    ) -> BoxFuture<'static, Result<LoginOutcome, ApiError>>;
}

pub struct LoginUseCase {
    repository: Arc<AuthRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<AuthRepository>) -> Self {
        Self { repository }
    }
}

impl Login for LoginUseCase {
    fn execute(
        &self,
        social: String,
        id_token: String,
    ) -> BoxFuture<'static, Result<LoginOutcome, ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.login(&social, &id_token).await }.boxed()
    }
}

/// Delete the account and drop local credentials.
pub trait DeleteAccount: Send + Sync + 'static {
    fn execute(&self) -> BoxFuture<'static, Result<(), ApiError>>;
}

pub struct DeleteAccountUseCase {
    repository: Arc<AuthRepository>,
}

impl DeleteAccountUseCase {
    pub fn new(repository: Arc<AuthRepository>) -> Self {
        Self { repository }
    }
}

impl DeleteAccount for DeleteAccountUseCase {
    fn execute(&self) -> BoxFuture<'static, Result<(), ApiError>> {
        let repository = Arc::clone(&self.repository);
        async move { repository.delete_account().await }.boxed()
    }
}
