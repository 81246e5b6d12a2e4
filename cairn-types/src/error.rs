//! The engine error descriptor.
//!
//! Every failure surfaced by the engine's operation layer is described by
//! an [`EngineError`] value: a stable code, a human-readable message, and
//! whatever metadata the failing operation attached. The handle layer
//! translates these into host errors without loss.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Grouping of engine error codes.
///
/// The host error produced by translation carries the category of the code
/// it was translated from, so callers can match on the failure domain
/// without enumerating codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Client-side failures (bad local state, shutdown, timeouts).
    Client,
    /// Malformed or unexpected JSON payloads.
    Json,
    /// Sync session failures.
    Session,
    /// Transport-level HTTP failures.
    Http,
    /// Server-reported service failures.
    Service,
    /// Anything the engine could not classify.
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Client => "client",
            Self::Json => "json",
            Self::Session => "session",
            Self::Http => "http",
            Self::Service => "service",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Engine operation-layer error codes.
///
/// Each code has a stable numeric wire value and belongs to exactly one
/// [`ErrorCategory`]. Unknown wire values decode to [`ErrorCode::Unknown`]
/// rather than failing, so decoding is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The client has been stopped and cannot serve further operations.
    ClientShutdown,
    /// A start was requested while the client was already running.
    ClientAlreadyRunning,
    /// A request did not complete within the configured timeout.
    NetworkTimeout,
    /// The service redirected to a location the client refused to follow.
    BadRedirect,

    /// A payload could not be parsed as JSON.
    MalformedJson,
    /// A parsed payload was missing a required key.
    MissingJsonKey,
    /// A payload value had an unexpected shape or type.
    InvalidPayload,

    /// The session token was rejected by the service.
    BadToken,
    /// The session token has expired and must be refreshed.
    TokenExpired,
    /// The referenced user does not exist.
    UserNotFound,
    /// The referenced user exists but is disabled.
    UserDisabled,
    /// Credentials were rejected.
    AuthFailed,

    /// The HTTP request itself failed.
    HttpRequestFailed,

    /// The service is temporarily unavailable.
    ServiceUnavailable,
    /// The service throttled the request.
    RateLimited,

    /// The engine could not classify the failure.
    Unknown,
}

/// All codes in wire-value order. Kept in one place so totality tests can
/// enumerate the full set.
pub const ALL_ERROR_CODES: [ErrorCode; 16] = [
    ErrorCode::ClientShutdown,
    ErrorCode::ClientAlreadyRunning,
    ErrorCode::NetworkTimeout,
    ErrorCode::BadRedirect,
    ErrorCode::MalformedJson,
    ErrorCode::MissingJsonKey,
    ErrorCode::InvalidPayload,
    ErrorCode::BadToken,
    ErrorCode::TokenExpired,
    ErrorCode::UserNotFound,
    ErrorCode::UserDisabled,
    ErrorCode::AuthFailed,
    ErrorCode::HttpRequestFailed,
    ErrorCode::ServiceUnavailable,
    ErrorCode::RateLimited,
    ErrorCode::Unknown,
];

impl ErrorCode {
    /// Returns the stable numeric wire value of this code.
    #[must_use]
    pub const fn value(&self) -> u16 {
        match self {
            Self::ClientShutdown => 1000,
            Self::ClientAlreadyRunning => 1001,
            Self::NetworkTimeout => 1002,
            Self::BadRedirect => 1003,
            Self::MalformedJson => 2000,
            Self::MissingJsonKey => 2001,
            Self::InvalidPayload => 2002,
            Self::BadToken => 3000,
            Self::TokenExpired => 3001,
            Self::UserNotFound => 3002,
            Self::UserDisabled => 3003,
            Self::AuthFailed => 3004,
            Self::HttpRequestFailed => 4000,
            Self::ServiceUnavailable => 5000,
            Self::RateLimited => 5001,
            Self::Unknown => 9999,
        }
    }

    /// Decodes a wire value. Total: values with no assigned code decode to
    /// [`ErrorCode::Unknown`].
    #[must_use]
    pub const fn from_value(value: u16) -> Self {
        match value {
            1000 => Self::ClientShutdown,
            1001 => Self::ClientAlreadyRunning,
            1002 => Self::NetworkTimeout,
            1003 => Self::BadRedirect,
            2000 => Self::MalformedJson,
            2001 => Self::MissingJsonKey,
            2002 => Self::InvalidPayload,
            3000 => Self::BadToken,
            3001 => Self::TokenExpired,
            3002 => Self::UserNotFound,
            3003 => Self::UserDisabled,
            3004 => Self::AuthFailed,
            4000 => Self::HttpRequestFailed,
            5000 => Self::ServiceUnavailable,
            5001 => Self::RateLimited,
            _ => Self::Unknown,
        }
    }

    /// Returns the category this code belongs to.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ClientShutdown
            | Self::ClientAlreadyRunning
            | Self::NetworkTimeout
            | Self::BadRedirect => ErrorCategory::Client,
            Self::MalformedJson | Self::MissingJsonKey | Self::InvalidPayload => {
                ErrorCategory::Json
            }
            Self::BadToken
            | Self::TokenExpired
            | Self::UserNotFound
            | Self::UserDisabled
            | Self::AuthFailed => ErrorCategory::Session,
            Self::HttpRequestFailed => ErrorCategory::Http,
            Self::ServiceUnavailable | Self::RateLimited => ErrorCategory::Service,
            Self::Unknown => ErrorCategory::Unknown,
        }
    }

    /// Returns the canonical snake_case name of this code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ClientShutdown => "client_shutdown",
            Self::ClientAlreadyRunning => "client_already_running",
            Self::NetworkTimeout => "network_timeout",
            Self::BadRedirect => "bad_redirect",
            Self::MalformedJson => "malformed_json",
            Self::MissingJsonKey => "missing_json_key",
            Self::InvalidPayload => "invalid_payload",
            Self::BadToken => "bad_token",
            Self::TokenExpired => "token_expired",
            Self::UserNotFound => "user_not_found",
            Self::UserDisabled => "user_disabled",
            Self::AuthFailed => "auth_failed",
            Self::HttpRequestFailed => "http_request_failed",
            Self::ServiceUnavailable => "service_unavailable",
            Self::RateLimited => "rate_limited",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An error value produced by the engine's operation layer.
///
/// Equality is structural; the handle layer relies on that to guarantee
/// that translating equal engine errors yields equal host errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineError {
    /// Stable operation-layer error code.
    pub code: ErrorCode,

    /// Human-readable description of the failure.
    pub message: String,

    /// Operation-specific metadata, ordered for deterministic rendering.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,

    /// HTTP status, when the failure came from a transport response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,

    /// Link to the server-side logs for this failure, when the service
    /// reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_to_logs: Option<String>,
}

impl EngineError {
    /// Creates an error with a code and message and no metadata.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            metadata: BTreeMap::new(),
            http_status: None,
            link_to_logs: None,
        }
    }

    /// Attaches a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Attaches the HTTP status of the failed response.
    #[must_use]
    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Attaches the server-log link reported by the service.
    #[must_use]
    pub fn with_link_to_logs(mut self, link: impl Into<String>) -> Self {
        self.link_to_logs = Some(link.into());
        self
    }

    /// Returns the category of this error's code.
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for EngineError {}
