//! Log severity levels.
//!
//! Levels mirror the engine's nine-step scale. `Off` and `All` are
//! threshold endpoints: a threshold of `Off` silences a category and `All`
//! admits everything, but records themselves are logged at the seven
//! levels in between. The order goes from least verbose (`Off`) to most
//! verbose (`All`).

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record or threshold of a category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Threshold endpoint: nothing is logged.
    Off = 0,
    /// Unrecoverable failures.
    Fatal = 1,
    /// Recoverable failures.
    Error = 2,
    /// Suspicious conditions worth surfacing.
    Warn = 3,
    /// Coarse operational messages. The default threshold.
    Info = 4,
    /// Finer operational detail.
    Detail = 5,
    /// Development diagnostics.
    Debug = 6,
    /// Very verbose diagnostics.
    Trace = 7,
    /// Threshold endpoint: everything is logged.
    All = 8,
}

/// All levels in ascending verbosity order.
pub(crate) const ALL_LEVELS: [LogLevel; 9] = [
    LogLevel::Off,
    LogLevel::Fatal,
    LogLevel::Error,
    LogLevel::Warn,
    LogLevel::Info,
    LogLevel::Detail,
    LogLevel::Debug,
    LogLevel::Trace,
    LogLevel::All,
];

impl LogLevel {
    /// Returns the canonical lowercase name of this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Detail => "detail",
            Self::Debug => "debug",
            Self::Trace => "trace",
            Self::All => "all",
        }
    }

    /// Returns true for the threshold-only endpoints `Off` and `All`,
    /// which are not valid record severities.
    #[must_use]
    pub const fn is_threshold_only(&self) -> bool {
        matches!(self, Self::Off | Self::All)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_LEVELS
            .iter()
            .find(|level| level.as_str() == s)
            .copied()
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}
