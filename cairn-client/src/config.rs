//! Host-side application configuration.

use cairn_log::LogLevel;
use cairn_types::AppId;
use serde::{Deserialize, Serialize};

/// Default base URL of the backing service.
pub const DEFAULT_BASE_URL: &str = "https://services.cairndb.dev";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 60_000;

/// Configuration used to construct an [`App`](crate::App).
///
/// A value object: the handle keeps the snapshot it was built from and
/// returns it unchanged from [`App::config`](crate::App::config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application identifier.
    pub app_id: AppId,

    /// Base URL of the backing service.
    pub base_url: String,

    /// Human-readable device name sent during handshakes.
    pub device_name: String,

    /// SDK version reported to the service.
    pub sdk_version: String,

    /// Timeout for individual requests, in milliseconds.
    pub request_timeout_ms: u64,

    /// Threshold installed on the root category of the logger the app
    /// logs through.
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Creates a configuration for `app_id` with default settings.
    #[must_use]
    pub fn new(app_id: AppId) -> Self {
        Self {
            app_id,
            base_url: DEFAULT_BASE_URL.to_string(),
            device_name: "cairn device".to_string(),
            sdk_version: env!("CARGO_PKG_VERSION").to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: LogLevel::Info,
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the device name.
    #[must_use]
    pub fn with_device_name(mut self, device_name: impl Into<String>) -> Self {
        self.device_name = device_name.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    /// Sets the log level threshold.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}
