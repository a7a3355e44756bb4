use std::sync::Arc;

use crate::auth::TokenStore;
use crate::net::{ApiError, ApiRequest, Gateway};
use crate::repository::dto::TokenResponse;

/// Result of a social-token exchange.
///
/// The remote answers the exchange with an empty pair for unknown
/// accounts; that is a sign-up prompt, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    NeedsSignUp,
}

/// Data access for login, sign-up and account lifecycle.
pub struct AuthRepository {
    gateway: Arc<Gateway>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthRepository {
    pub fn new(gateway: Arc<Gateway>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { gateway, tokens }
    }

    /// Exchange a social-provider identity token for a credential pair.
    /// A valid pair is persisted before returning.
    pub async fn login(&self, social: &str, id_token: &str) -> Result<LoginOutcome, ApiError> {
        let request = ApiRequest::post(format!("auth/{social}"))
            .json(serde_json::json!({ "idToken": id_token }))
            .public();
        let response: TokenResponse = self.gateway.call(request).await?;
        let pair = response.into_domain();

        if pair.is_valid() {
            self.tokens.set_tokens(&pair);
            Ok(LoginOutcome::LoggedIn)
        } else {
            Ok(LoginOutcome::NeedsSignUp)
        }
    }

    /// Register a new account. Returns whether the returned pair was
    /// valid (and therefore persisted).
    pub async fn sign_up(
        &self,
        social: &str,
        id_token: &str,
        age: Option<u32>,
        gender: Option<&str>,
        nickname: Option<&str>,
    ) -> Result<bool, ApiError> {
        let request = ApiRequest::post("auth/signup")
            .json(serde_json::json!({
                "idToken": id_token,
                "social": social,
                "age": age,
                "gender": gender,
                "nickname": nickname,
            }))
            .public();
        let response: TokenResponse = self.gateway.call(request).await?;
        let pair = response.into_domain();

        if pair.is_valid() {
            self.tokens.set_tokens(&pair);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Delete the account, then drop local credentials.
    pub async fn delete_account(&self) -> Result<(), ApiError> {
        self.gateway.call_empty(ApiRequest::delete("users/me")).await?;
        self.tokens.clear();
        Ok(())
    }

    /// Drop local credentials without a remote call.
    pub fn sign_out(&self) {
        self.tokens.clear();
    }
}
