//! Credential storage for the two auth token strings.
//!
//! The platform keychain is out of scope; it is modeled as the
//! [`TokenStore`] trait, a key-value store for exactly two named values.

mod store;
mod tokens;

pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use tokens::TokenPair;
