//! Error taxonomy for remote calls.
//!
//! Every failure a repository can surface is one of these kinds. The
//! gateway maps transport and HTTP failures here; repositories pass
//! them through unchanged unless a use case declares a degradation
//! policy.

use thiserror::Error;

/// Errors raised by the gateway and passed through the repository layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection reset, timeout.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// Response body did not match the declared shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// Token expired or invalid after one refresh-and-replay attempt.
    /// Terminal: the caller should force re-login.
    #[error("authentication failed")]
    Unauthorized,

    /// Remote resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// Remote 5xx-class failure.
    #[error("server error ({status})")]
    Server { status: u16 },

    /// Caller passed input the remote rejected.
    #[error("invalid request: {message}")]
    Validation { message: String },
}

impl ApiError {
    /// Stable kind string used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
            ApiError::Unauthorized => "unauthorized",
            ApiError::NotFound => "not_found",
            ApiError::Server { .. } => "server",
            ApiError::Validation { .. } => "validation",
        }
    }

    /// True for failures that should force a sign-out/re-login flow.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}
