//! Core type definitions for the CairnDB client layer.
//!
//! This crate defines the typed value objects exchanged across the boundary
//! between the application handle and the engine:
//! - Application and device identifiers
//! - The engine error descriptor (code, category, message, metadata)
//!
//! Engine-owned state (sync sessions, storage) never appears here. These
//! types exist so the handle and logging layers can be constructed and
//! tested in isolation from the engine.

mod error;
mod ids;

pub use error::{ALL_ERROR_CODES, EngineError, ErrorCategory, ErrorCode};
pub use ids::{AppId, DeviceId, InvalidAppId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid app id: {0}")]
    InvalidAppId(#[from] InvalidAppId),
}
