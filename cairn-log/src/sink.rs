//! Log sinks — destinations for formatted records.

use crate::{LogCategory, LogLevel};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Mutex;

/// A single formatted log record.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity of the record.
    pub level: LogLevel,
    /// Category the record was tagged with.
    pub category: LogCategory,
    /// The formatted message.
    pub message: String,
    /// Wall-clock time the record was emitted.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(category: LogCategory, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            category,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.timestamp.to_rfc3339(),
            self.level,
            self.category,
            self.message
        )
    }
}

/// A destination for log records.
///
/// Sinks are called from arbitrary threads, including engine background
/// threads; implementations must tolerate concurrent callers. The logger
/// adds no synchronization of its own around `write`, so any ordering
/// guarantee between concurrent records is the sink's to provide.
pub trait LogSink: Send + Sync {
    /// Writes one record. Must not panic.
    fn write(&self, record: &LogRecord);
}

/// Sink that forwards records into the `tracing` ecosystem.
///
/// The nine engine levels collapse onto `tracing`'s five: `Fatal` joins
/// `Error` and `Detail` joins `Debug`. The category travels as the
/// `category` event field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn write(&self, record: &LogRecord) {
        let category = record.category.name();
        match record.level {
            LogLevel::Fatal | LogLevel::Error => {
                tracing::error!(category = category, "{}", record.message);
            }
            LogLevel::Warn => tracing::warn!(category = category, "{}", record.message),
            LogLevel::Info => tracing::info!(category = category, "{}", record.message),
            LogLevel::Detail | LogLevel::Debug => {
                tracing::debug!(category = category, "{}", record.message);
            }
            LogLevel::Trace => tracing::trace!(category = category, "{}", record.message),
            // Threshold endpoints never reach a sink through the logger;
            // drop them if a caller writes directly.
            LogLevel::Off | LogLevel::All => {}
        }
    }
}

/// Sink that invokes an arbitrary callback for each record.
pub struct CallbackSink {
    callback: Box<dyn Fn(&LogRecord) + Send + Sync>,
}

impl CallbackSink {
    /// Wraps a callback.
    pub fn new(callback: impl Fn(&LogRecord) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl LogSink for CallbackSink {
    fn write(&self, record: &LogRecord) {
        (self.callback)(record);
    }
}

impl fmt::Debug for CallbackSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

/// Sink that buffers records in memory. Diagnostic/testing use.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the buffered records.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns the number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns true if no records have been buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all buffered records.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
    }
}
