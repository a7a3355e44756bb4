//! Networking layer: typed API calls, auth attachment, error mapping.
//!
//! The [`Gateway`] is the only component allowed to refresh tokens. It
//! attaches the current access token to every authorized request and,
//! on an unauthorized response, refreshes once and replays the call.

mod config;
mod error;
mod gateway;
mod request;

pub use config::GatewayConfig;
pub use error::ApiError;
pub use gateway::Gateway;
pub use request::ApiRequest;
