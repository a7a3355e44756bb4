//! Core engine for a link-organizing client.
//!
//! Two layers:
//!
//! - [`mvi`]: the reactive state-container engine. Each screen owns a
//!   [`mvi::Store`] that turns actions into asynchronous mutation
//!   streams and reduces them into state on a serialized timeline,
//!   with one-shot pulse signals for transient events.
//! - [`net`] / [`repository`]: the normalization layer that executes
//!   typed API calls, attaches and refreshes credentials, decodes wire
//!   DTOs into [`domain`] models, and maps failures into a small error
//!   taxonomy.
//!
//! [`usecase`] holds the capability-scoped seams between the two, and
//! [`features`] the per-screen reactors built on them. Presentation is
//! out of scope: adapters subscribe to state and pulses and dispatch
//! actions, nothing more.

pub mod auth;
pub mod domain;
pub mod features;
pub mod logging;
pub mod mvi;
pub mod net;
pub mod repository;
pub mod usecase;
