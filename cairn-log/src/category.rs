//! The engine's log category tree.
//!
//! Categories form a fixed hierarchy rooted at `cairn`. Setting a level
//! threshold on a category applies to its whole subtree, so the tree shape
//! is part of the public contract. The set is defined by the engine and
//! does not change at runtime; enumeration is intended for diagnostics and
//! testing, not for production control flow.

use crate::error::LogError;
use std::fmt;
use std::str::FromStr;

/// A named grouping used to tag and filter log messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    /// Root of the tree; every message belongs to it.
    Root,
    /// Storage engine activity.
    Storage,
    /// Write transactions.
    Transaction,
    /// Query execution.
    Query,
    /// Object lifecycle (creation, mutation, deletion).
    Object,
    /// Change notifications.
    Notification,
    /// Everything sync.
    Sync,
    /// Sync client state.
    SyncClient,
    /// Session-level sync client activity.
    Session,
    /// Changeset upload, download and integration.
    Changeset,
    /// Low-level network activity.
    Network,
    /// Client reset handling.
    Reset,
    /// Server messages surfaced to the client.
    SyncServer,
    /// Application services requests.
    App,
    /// Messages produced by the binding layer itself.
    Sdk,
}

/// The registry, in registration order.
const ALL_CATEGORIES: [LogCategory; 15] = [
    LogCategory::Root,
    LogCategory::Storage,
    LogCategory::Transaction,
    LogCategory::Query,
    LogCategory::Object,
    LogCategory::Notification,
    LogCategory::Sync,
    LogCategory::SyncClient,
    LogCategory::Session,
    LogCategory::Changeset,
    LogCategory::Network,
    LogCategory::Reset,
    LogCategory::SyncServer,
    LogCategory::App,
    LogCategory::Sdk,
];

impl LogCategory {
    /// Returns the dotted path name of this category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Root => "cairn",
            Self::Storage => "cairn.storage",
            Self::Transaction => "cairn.storage.transaction",
            Self::Query => "cairn.storage.query",
            Self::Object => "cairn.storage.object",
            Self::Notification => "cairn.storage.notification",
            Self::Sync => "cairn.sync",
            Self::SyncClient => "cairn.sync.client",
            Self::Session => "cairn.sync.client.session",
            Self::Changeset => "cairn.sync.client.changeset",
            Self::Network => "cairn.sync.client.network",
            Self::Reset => "cairn.sync.client.reset",
            Self::SyncServer => "cairn.sync.server",
            Self::App => "cairn.app",
            Self::Sdk => "cairn.sdk",
        }
    }

    /// Returns the parent category, or `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<Self> {
        match self {
            Self::Root => None,
            Self::Storage | Self::Sync | Self::App | Self::Sdk => Some(Self::Root),
            Self::Transaction | Self::Query | Self::Object | Self::Notification => {
                Some(Self::Storage)
            }
            Self::SyncClient | Self::SyncServer => Some(Self::Sync),
            Self::Session | Self::Changeset | Self::Network | Self::Reset => {
                Some(Self::SyncClient)
            }
        }
    }

    /// Returns the direct children of this category, in registration order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        ALL_CATEGORIES
            .iter()
            .filter(|c| c.parent() == Some(*self))
            .copied()
            .collect()
    }

    /// Returns this category and all of its descendants, in registration
    /// order.
    #[must_use]
    pub fn subtree(&self) -> Vec<Self> {
        ALL_CATEGORIES
            .iter()
            .filter(|c| c.is_in_subtree_of(*self))
            .copied()
            .collect()
    }

    /// Returns true if `ancestor` is this category or one of its ancestors.
    #[must_use]
    pub fn is_in_subtree_of(&self, ancestor: Self) -> bool {
        let mut current = Some(*self);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = c.parent();
        }
        false
    }

    /// Returns the complete registered category set, in registration order.
    ///
    /// Diagnostic/testing use; the order is whatever the engine reports and
    /// is not guaranteed stable across engine versions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &ALL_CATEGORIES
    }

    /// Parses a dotted path name into a category.
    ///
    /// Unrecognized names fail with [`LogError::UnknownCategory`]; the
    /// outcome for a given name is the same on every call.
    pub fn from_name(name: &str) -> Result<Self, LogError> {
        ALL_CATEGORIES
            .iter()
            .find(|c| c.name() == name)
            .copied()
            .ok_or_else(|| LogError::UnknownCategory(name.to_string()))
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LogCategory {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
