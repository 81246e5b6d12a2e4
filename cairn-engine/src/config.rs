//! Finalized engine-side client configuration.

use cairn_types::{AppId, DeviceId};
use std::time::Duration;

/// Configuration an engine client is constructed with.
///
/// Built by the handle layer from the host configuration; immutable once
/// the client exists. The client returns it unchanged from
/// [`Client::config`](crate::Client::config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Application this client serves.
    pub app_id: AppId,

    /// Base URL of the backing service.
    pub base_url: String,

    /// Identifier of this device installation.
    pub device_id: DeviceId,

    /// Human-readable device name sent during handshakes.
    pub device_name: String,

    /// Name of the SDK driving this client.
    pub sdk_name: String,

    /// Version of the SDK driving this client.
    pub sdk_version: String,

    /// Timeout applied to individual requests.
    pub request_timeout: Duration,
}
