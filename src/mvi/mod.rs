//! Reactive state-container primitives.
//!
//! This module provides the engine for unidirectional data flow: each
//! screen owns one [`Store`] that accepts actions, runs their side
//! effects concurrently, and reduces the resulting mutations into state
//! on a single serialized timeline.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ mutate ──→ Mutation ──→ reduce ──→ State ──→ observers
//!    ↑      (async,        │       (pure,         │
//!    │     concurrent)     │      serialized)     │
//!    └─────────────────────┴──────────────────────┘
//! ```
//!
//! - **State**: the durable, queryable snapshot a store exposes
//! - **Action**: user or lifecycle intent fed in from outside
//! - **Mutation**: internal state delta, never exposed outside a store
//! - **Pulse**: transient signal delivered at most once per emission,
//!   only to currently-live subscribers

mod reactor;
mod store;

pub use reactor::Reactor;
pub use store::{MutationSink, Store};
