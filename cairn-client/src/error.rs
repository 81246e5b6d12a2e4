//! Host-level errors and engine error translation.

use cairn_types::{EngineError, ErrorCategory, ErrorCode};
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;

/// Host-level error translated from an engine error value.
///
/// Preserves the code, category, message, metadata and transport details
/// of the engine error it was built from, so callers can match on any of
/// them without reaching back into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} error ({code}): {message}")]
pub struct AppError {
    category: ErrorCategory,
    code: ErrorCode,
    message: String,
    metadata: BTreeMap<String, String>,
    http_status: Option<u16>,
    link_to_logs: Option<String>,
}

impl AppError {
    /// Returns the failure domain.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Returns the engine error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the human-readable message. Never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the metadata carried over from the engine error.
    #[must_use]
    pub const fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Returns the HTTP status of the failed response, if any.
    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    /// Returns the server-log link reported by the service, if any.
    #[must_use]
    pub fn link_to_logs(&self) -> Option<&str> {
        self.link_to_logs.as_deref()
    }
}

/// Translates an engine error value into a host error.
///
/// Total and deterministic: every engine error maps to exactly one
/// [`AppError`], equal inputs produce equal outputs, and nothing panics.
/// Empty engine messages are replaced by the code name so the host
/// message is always non-empty.
#[must_use]
pub fn translate_error(error: &EngineError) -> AppError {
    let message = if error.message.is_empty() {
        error.code.as_str().to_string()
    } else {
        error.message.clone()
    };
    AppError {
        category: error.code.category(),
        code: error.code,
        message,
        metadata: error.metadata.clone(),
        http_status: error.http_status,
        link_to_logs: error.link_to_logs.clone(),
    }
}

impl From<EngineError> for AppError {
    fn from(error: EngineError) -> Self {
        translate_error(&error)
    }
}
