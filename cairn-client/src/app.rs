//! The application handle.

use crate::config::AppConfig;
use crate::error::AppResult;
use cairn_engine::{Client, ClientConfig, ClientState};
use cairn_log::{LogCategory, Logger, default_logger};
use cairn_types::{AppId, DeviceId};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use std::time::Duration;

/// SDK name reported to the service by every client this crate builds.
pub const SDK_NAME: &str = "cairn-rs";

/// Handle to a running application client.
///
/// The handle shares ownership of the engine client with the engine's own
/// background tasks; dropping the last handle does not tear the client
/// out from under them. Handles are cheap to clone via `Arc` and safe to
/// share across threads.
pub struct App {
    config: AppConfig,
    client: Arc<Client>,
    logger: Logger,
}

static CACHE: OnceLock<RwLock<HashMap<AppId, Arc<App>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<AppId, Arc<App>>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

impl App {
    /// Creates an app from a configuration, logging through the process
    /// default logger.
    #[must_use]
    pub fn new(config: AppConfig) -> Arc<Self> {
        Self::with_logger(config, default_logger())
    }

    /// Creates an app logging through `logger`.
    ///
    /// The configured log level is installed as the root threshold of
    /// `logger`, so it applies to every category the engine logs under.
    #[must_use]
    pub fn with_logger(config: AppConfig, logger: Logger) -> Arc<Self> {
        logger.set_level(LogCategory::Root, config.log_level);
        let client_config = ClientConfig {
            app_id: config.app_id.clone(),
            base_url: config.base_url.clone(),
            device_id: DeviceId::new(),
            device_name: config.device_name.clone(),
            sdk_name: SDK_NAME.to_string(),
            sdk_version: config.sdk_version.clone(),
            request_timeout: Duration::from_millis(config.request_timeout_ms),
        };
        let client = Client::new(client_config, logger.clone());
        Arc::new(Self {
            config,
            client,
            logger,
        })
    }

    /// Returns the cached app for this configuration's id, creating it on
    /// first use.
    ///
    /// Repeated calls with the same id return the same handle, and
    /// therefore the same underlying client instance; the configuration
    /// of later calls is ignored once an app is cached.
    #[must_use]
    pub fn get_or_create(config: AppConfig) -> Arc<Self> {
        let mut cache = cache().write().unwrap_or_else(|e| e.into_inner());
        if let Some(app) = cache.get(&config.app_id) {
            return Arc::clone(app);
        }
        let app = Self::new(config);
        cache.insert(app.config.app_id.clone(), Arc::clone(&app));
        app
    }

    /// Returns the cached app for `app_id`, if any.
    #[must_use]
    pub fn cached(app_id: &AppId) -> Option<Arc<Self>> {
        cache()
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(app_id)
            .cloned()
    }

    /// Drops every cached app. Diagnostic/testing use.
    pub fn clear_cached() {
        cache().write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// Returns the configuration snapshot this app was built from.
    ///
    /// The snapshot never changes after construction; repeated calls
    /// return value-equal results.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the underlying shared engine client.
    ///
    /// The returned handle is shared with the engine; callers must not
    /// assume exclusive ownership.
    #[must_use]
    pub fn client(&self) -> Arc<Client> {
        Arc::clone(&self.client)
    }

    /// Returns the logger this app logs through.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Starts the underlying client, translating engine errors at the
    /// boundary.
    pub async fn start(&self) -> AppResult<()> {
        self.client.start().await?;
        Ok(())
    }

    /// Stops the underlying client.
    pub async fn stop(&self) {
        self.client.stop().await;
    }

    /// Returns the current lifecycle state of the underlying client.
    pub async fn state(&self) -> ClientState {
        self.client.state().await
    }
}
