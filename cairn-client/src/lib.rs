//! Application handle for the CairnDB client layer.
//!
//! An [`App`] is the host-facing entry point to a running engine client:
//! it keeps the configuration snapshot it was built from, hands out the
//! shared engine client, and translates engine error values into host
//! errors.
//!
//! # Example
//!
//! ```
//! use cairn_client::{App, AppConfig, AppId};
//!
//! let config = AppConfig::new(AppId::new("cairn-demo").unwrap())
//!     .with_device_name("docs");
//! let app = App::new(config);
//!
//! assert_eq!(app.config().app_id.as_str(), "cairn-demo");
//! ```

mod app;
mod config;
mod error;

pub use app::{App, SDK_NAME};
pub use config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS};
pub use error::{AppError, AppResult, translate_error};

// The handle hands out engine and logging types directly; re-export them
// so downstream code needs a single dependency.
pub use cairn_engine::{Client, ClientConfig, ClientState};
pub use cairn_log::{LogCategory, LogLevel, Logger};
pub use cairn_types::{AppId, DeviceId, EngineError, ErrorCategory, ErrorCode};
