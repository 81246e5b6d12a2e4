//! Error types for the logging facility.
//!
//! Only parsing operations can fail; log emission itself is best-effort
//! and never returns an error.

use thiserror::Error;

/// Result type for logging operations that can fail.
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur when parsing level or category names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// The name is not in the engine's category registry.
    #[error("unknown log category: {0}")]
    UnknownCategory(String),

    /// The name is not one of the nine level names.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}
