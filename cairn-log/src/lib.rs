//! Structured logging facility for the CairnDB client layer.
//!
//! Routes leveled, optionally categorized messages to a pluggable sink and
//! exposes the engine's fixed category tree.
//!
//! # Architecture
//!
//! - **Levels**: the engine's nine-step severity scale ([`LogLevel`])
//! - **Categories**: a fixed hierarchy rooted at `cairn` ([`LogCategory`]),
//!   used to tag and filter messages per subsystem
//! - **Sinks**: pluggable destinations ([`LogSink`]) — the `tracing`
//!   forwarder is the default choice for host applications
//! - **Logger**: the routing front ([`Logger`]) with per-category level
//!   thresholds and a process-wide default instance
//!
//! Logging is best-effort: a logger without a sink accepts every call and
//! does nothing, and no logging operation ever returns an error.
//!
//! # Example
//!
//! ```
//! use cairn_log::{LogCategory, LogLevel, Logger, MemorySink};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::new(sink.clone());
//!
//! logger.log(LogLevel::Info, format_args!("opened {} sessions", 2));
//! logger.log_in(LogCategory::Session, LogLevel::Warn, "session interrupted");
//!
//! assert_eq!(sink.len(), 2);
//! ```

mod category;
mod error;
mod level;
mod logger;
mod sink;

pub use category::LogCategory;
pub use error::{LogError, LogResult};
pub use level::LogLevel;
pub use logger::{Logger, default_logger, set_default_logger};
pub use sink::{CallbackSink, LogRecord, LogSink, MemorySink, TracingSink};
