use std::sync::Arc;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::auth::{TokenPair, TokenStore};
use crate::net::config::GatewayConfig;
use crate::net::error::ApiError;
use crate::net::request::ApiRequest;

/// Executes typed API calls against the remote service.
///
/// The gateway is process-wide and shared by every store. It is
/// read-mostly; the only mutation it performs is the token refresh,
/// which is serialized behind [`Self::refresh_lock`] so that concurrent
/// unauthorized responses caused by the same stale token produce at
/// most one refresh call, with the other waiters reusing its result.
pub struct Gateway {
    client: Client,
    config: GatewayConfig,
    tokens: Arc<dyn TokenStore>,
    refresh_lock: Mutex<()>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshResponse {
    access_token: String,
    refresh_token: String,
}

impl Gateway {
    pub fn new(config: GatewayConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            config,
            tokens,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Execute a request and decode the JSON response into `T`.
    pub async fn call<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.dispatch(&request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Execute a request and discard the response body.
    pub async fn call_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.dispatch(&request).await.map(|_| ())
    }

    /// One network call, plus at most one refresh-and-replay on 401.
    async fn dispatch(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let stale = if request.requires_auth() {
            self.tokens.access_token()
        } else {
            None
        };

        tracing::debug!(method = %request.method(), path = request.path(), "api call");
        let response = self.send(request, stale.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED || !request.requires_auth() {
            return classify(response).await;
        }

        let fresh = self.refresh_access_token(stale).await?;
        let replayed = self.send(request, Some(&fresh)).await?;
        if replayed.status() == StatusCode::UNAUTHORIZED {
            // Replay with a fresh token still rejected: terminal.
            tracing::warn!(path = request.path(), "unauthorized after token refresh");
            return Err(ApiError::Unauthorized);
        }
        classify(replayed).await
    }

    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            request.path().trim_start_matches('/')
        );

        let mut builder = self.client.request(request.method().clone(), url);
        if !request.query_params().is_empty() {
            builder = builder.query(request.query_params());
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder.send().await.map_err(ApiError::Transport)
    }

    /// Refresh the access token, de-duplicating concurrent attempts.
    ///
    /// Callers pass the token they just failed with. Whoever wins the
    /// lock performs the refresh; waiters observe that the stored token
    /// changed while they were queued and reuse it without a second
    /// refresh call.
    async fn refresh_access_token(&self, stale: Option<String>) -> Result<String, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.tokens.access_token() {
            if Some(&current) != stale.as_ref() {
                return Ok(current);
            }
        }

        let refresh_token = self.tokens.refresh_token().ok_or(ApiError::Unauthorized)?;
        tracing::info!("refreshing access token");

        let request = ApiRequest::post("auth/token")
            .json(serde_json::json!({ "refreshToken": refresh_token }))
            .public();
        let response = classify(self.send(&request, None).await?).await?;
        let refreshed: RefreshResponse = response
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        let pair = TokenPair::new(refreshed.access_token, refreshed.refresh_token);
        if !pair.is_valid() {
            return Err(ApiError::Unauthorized);
        }
        self.tokens.set_tokens(&pair);
        Ok(pair.access_token)
    }
}

/// Map a non-2xx response into the error taxonomy.
async fn classify(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        _ if status.is_server_error() => Err(ApiError::Server {
            status: status.as_u16(),
        }),
        _ => {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Validation { message })
        }
    }
}
