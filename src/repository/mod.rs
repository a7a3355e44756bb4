//! Domain-facing data access over the gateway.
//!
//! Each operation performs exactly one underlying network call, decodes
//! the wire DTO into a domain model, and surfaces typed failures
//! unchanged. The one exception is the tag-list fetch, which degrades
//! to an empty list because it is a non-critical read.

mod auth;
mod dto;
mod links;

pub use auth::{AuthRepository, LoginOutcome};
pub use links::LinkRepository;
