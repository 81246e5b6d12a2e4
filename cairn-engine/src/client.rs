//! The shared-ownership engine client.

use crate::EngineResult;
use crate::config::ClientConfig;
use cairn_log::{LogCategory, LogLevel, Logger};
use cairn_types::{DeviceId, EngineError, ErrorCode};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{RwLock, watch};

/// Interval between connection monitor heartbeats.
const MONITOR_INTERVAL: Duration = Duration::from_secs(30);

/// Lifecycle state of an engine client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// Constructed, not yet started.
    Idle,
    /// Background work is running.
    Running,
    /// Stopped. A stopped client cannot be restarted.
    Stopped,
}

/// The engine's application client.
///
/// Always held behind `Arc`: engine-side tasks log and signal through
/// state they share with the client, so the handle layer must never
/// assume exclusive ownership. All methods are safe to call from any
/// thread.
pub struct Client {
    config: ClientConfig,
    state: RwLock<ClientState>,
    shutdown: watch::Sender<bool>,
    logger: Logger,
}

impl Client {
    /// Creates a client from a finalized configuration.
    ///
    /// The client logs through `logger` for its whole lifetime, including
    /// from background tasks.
    pub fn new(config: ClientConfig, logger: Logger) -> Arc<Self> {
        let (shutdown, _) = watch::channel(false);
        let client = Arc::new(Self {
            config,
            state: RwLock::new(ClientState::Idle),
            shutdown,
            logger,
        });
        client.logger.log_in(
            LogCategory::App,
            LogLevel::Detail,
            &format!("client created for app {}", client.config.app_id),
        );
        client
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns this device's identifier.
    pub fn device_id(&self) -> DeviceId {
        self.config.device_id
    }

    /// Returns the logger this client logs through.
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Returns the current lifecycle state.
    pub async fn state(&self) -> ClientState {
        *self.state.read().await
    }

    /// Starts background work.
    ///
    /// Fails with `ClientAlreadyRunning` if the client is running and with
    /// `ClientShutdown` if it has been stopped.
    pub async fn start(&self) -> EngineResult<()> {
        let mut state = self.state.write().await;
        match *state {
            ClientState::Running => Err(EngineError::new(
                ErrorCode::ClientAlreadyRunning,
                "client is already running",
            )
            .with_metadata("state", "running")),
            ClientState::Stopped => Err(EngineError::new(
                ErrorCode::ClientShutdown,
                "client has been stopped",
            )
            .with_metadata("state", "stopped")),
            ClientState::Idle => {
                *state = ClientState::Running;
                drop(state);
                self.spawn_monitor();
                self.logger
                    .log_in(LogCategory::SyncClient, LogLevel::Info, "client started");
                Ok(())
            }
        }
    }

    /// Stops background work and signals the monitor task to exit.
    /// Idempotent once stopped.
    pub async fn stop(&self) {
        let mut state = self.state.write().await;
        if *state == ClientState::Stopped {
            return;
        }
        *state = ClientState::Stopped;
        drop(state);
        let _ = self.shutdown.send(true);
        self.logger
            .log_in(LogCategory::SyncClient, LogLevel::Info, "client stopped");
    }

    /// Spawns the connection monitor. The task keeps its own clone of the
    /// logger and shutdown receiver, so it survives every handle to this
    /// client being dropped and exits only when signalled.
    fn spawn_monitor(&self) {
        let logger = self.logger.clone();
        let app_id = self.config.app_id.clone();
        let mut shutdown = self.shutdown.subscribe();
        tokio::spawn(async move {
            let mut tick = tokio::time::interval(MONITOR_INTERVAL);
            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        logger.log_in(
                            LogCategory::Network,
                            LogLevel::Debug,
                            &format!("connection monitor alive for app {app_id}"),
                        );
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            logger.log_in(
                                LogCategory::Network,
                                LogLevel::Debug,
                                "connection monitor exiting",
                            );
                            break;
                        }
                    }
                }
            }
        });
    }
}
