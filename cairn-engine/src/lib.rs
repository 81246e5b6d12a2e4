//! Engine client facade for the CairnDB client layer.
//!
//! The engine proper — storage, the sync protocol, conflict resolution —
//! lives behind this boundary and is out of scope here. This crate
//! provides the surface the application handle binds to:
//!
//! - [`ClientConfig`]: the finalized configuration a client is built with
//! - [`Client`]: the shared-ownership client object and its lifecycle
//!   operations, which produce [`cairn_types::EngineError`] values
//!
//! Clients are always held behind `Arc`. Engine-side background tasks keep
//! their own clones, so no single holder ever owns a client exclusively.

mod client;
mod config;

pub use client::{Client, ClientState};
pub use config::ClientConfig;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, cairn_types::EngineError>;
