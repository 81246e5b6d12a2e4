//! The logger: routes leveled, categorized messages to the active sink.

use crate::sink::{LogRecord, LogSink};
use crate::{LogCategory, LogLevel};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, RwLock};

/// Routes leveled, categorized messages to a sink.
///
/// A logger with no sink accepts every call and does nothing; logging is
/// best-effort and never fails. Cloning a logger is cheap and shares the
/// sink and the threshold table.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

struct Inner {
    sink: Option<Arc<dyn LogSink>>,
    thresholds: RwLock<HashMap<LogCategory, LogLevel>>,
}

impl Logger {
    /// Creates a logger writing to `sink`, with every category at the
    /// default `Info` threshold.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self::build(Some(sink))
    }

    /// Creates a logger from a concrete sink value.
    #[must_use]
    pub fn with_sink(sink: impl LogSink + 'static) -> Self {
        Self::build(Some(Arc::new(sink)))
    }

    /// Creates a logger with no sink; every call is a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self::build(None)
    }

    fn build(sink: Option<Arc<dyn LogSink>>) -> Self {
        let thresholds = LogCategory::all()
            .iter()
            .map(|c| (*c, LogLevel::Info))
            .collect();
        Self {
            inner: Arc::new(Inner {
                sink,
                thresholds: RwLock::new(thresholds),
            }),
        }
    }

    /// Formats `args` and logs the result at `level` under the root
    /// category.
    ///
    /// The formatting work is skipped entirely when the record would be
    /// filtered out.
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.would_log(LogCategory::Root, level) {
            return;
        }
        self.emit(LogCategory::Root, level, args.to_string());
    }

    /// Logs a pre-formatted message at `level` under `category`.
    pub fn log_in(&self, category: LogCategory, level: LogLevel, message: &str) {
        if !self.would_log(category, level) {
            return;
        }
        self.emit(category, level, message.to_string());
    }

    /// Logs under the category named `name`.
    ///
    /// Unrecognized names route to the root category: logging is
    /// best-effort and never rejects a message. Callers that need to
    /// validate a name parse it with [`LogCategory::from_name`] first.
    pub fn log_named(&self, name: &str, level: LogLevel, message: &str) {
        let category = LogCategory::from_name(name).unwrap_or(LogCategory::Root);
        self.log_in(category, level, message);
    }

    /// Returns true if a record at `level` under `category` would reach
    /// the sink.
    #[must_use]
    pub fn would_log(&self, category: LogCategory, level: LogLevel) -> bool {
        if self.inner.sink.is_none() || level.is_threshold_only() {
            return false;
        }
        level <= self.level_for(category)
    }

    /// Returns the threshold currently set for `category`.
    #[must_use]
    pub fn level_for(&self, category: LogCategory) -> LogLevel {
        self.inner
            .thresholds
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&category)
            .copied()
            .unwrap_or(LogLevel::Info)
    }

    /// Sets the threshold for `category` and its entire subtree.
    pub fn set_level(&self, category: LogCategory, level: LogLevel) {
        let mut thresholds = self
            .inner
            .thresholds
            .write()
            .unwrap_or_else(|e| e.into_inner());
        for c in category.subtree() {
            thresholds.insert(c, level);
        }
    }

    /// Returns the engine's registered categories, in registration order.
    ///
    /// Diagnostic/testing use only; the set is fixed for a given engine
    /// version but not guaranteed stable across versions.
    #[must_use]
    pub fn all_categories(&self) -> &'static [LogCategory] {
        LogCategory::all()
    }

    fn emit(&self, category: LogCategory, level: LogLevel, message: String) {
        if let Some(sink) = &self.inner.sink {
            sink.write(&LogRecord::new(category, level, message));
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("has_sink", &self.inner.sink.is_some())
            .finish_non_exhaustive()
    }
}

static DEFAULT: OnceLock<RwLock<Logger>> = OnceLock::new();

fn default_cell() -> &'static RwLock<Logger> {
    DEFAULT.get_or_init(|| RwLock::new(Logger::disabled()))
}

/// Returns the process-wide default logger.
///
/// Starts out sink-less (all calls are no-ops) until
/// [`set_default_logger`] installs a real one.
#[must_use]
pub fn default_logger() -> Logger {
    default_cell()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// Replaces the process-wide default logger.
///
/// Handles created before the swap keep the logger they were built with;
/// the engine holds loggers by value, not by name.
pub fn set_default_logger(logger: Logger) {
    *default_cell().write().unwrap_or_else(|e| e.into_inner()) = logger;
}
