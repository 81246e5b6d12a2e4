use cairn_engine::{Client, ClientConfig, ClientState};
use cairn_log::{LogCategory, LogLevel, Logger, MemorySink};
use cairn_types::{AppId, DeviceId, ErrorCode};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn make_config() -> ClientConfig {
    ClientConfig {
        app_id: AppId::new("cairn-test").unwrap(),
        base_url: "https://services.cairndb.dev".to_string(),
        device_id: DeviceId::new(),
        device_name: "test device".to_string(),
        sdk_name: "cairn-rs".to_string(),
        sdk_version: "0.4.1".to_string(),
        request_timeout: Duration::from_secs(60),
    }
}

fn make_client() -> Arc<Client> {
    Client::new(make_config(), Logger::disabled())
}

fn memory_logger() -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    (Logger::new(sink.clone()), sink)
}

// ── Construction & accessors ─────────────────────────────────────

#[tokio::test]
async fn client_exposes_its_configuration() {
    let config = make_config();
    let client = Client::new(config.clone(), Logger::disabled());

    assert_eq!(*client.config(), config);
    assert_eq!(client.device_id(), config.device_id);
    assert_eq!(client.state().await, ClientState::Idle);
}

#[tokio::test]
async fn configuration_is_stable_across_reads() {
    let client = make_client();
    assert_eq!(client.config(), client.config());
}

#[tokio::test]
async fn clones_share_one_client_instance() {
    let client = make_client();
    let other = Arc::clone(&client);
    assert!(Arc::ptr_eq(&client, &other));
}

// ── Lifecycle ────────────────────────────────────────────────────

#[tokio::test]
async fn start_transitions_to_running() {
    let client = make_client();
    client.start().await.unwrap();
    assert_eq!(client.state().await, ClientState::Running);
    client.stop().await;
}

#[tokio::test]
async fn double_start_is_rejected() {
    let client = make_client();
    client.start().await.unwrap();

    let err = client.start().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ClientAlreadyRunning);
    assert!(!err.message.is_empty());
    assert_eq!(err.metadata.get("state").map(String::as_str), Some("running"));

    client.stop().await;
}

#[tokio::test]
async fn stop_transitions_to_stopped() {
    let client = make_client();
    client.start().await.unwrap();
    client.stop().await;
    assert_eq!(client.state().await, ClientState::Stopped);
}

#[tokio::test]
async fn stop_is_idempotent() {
    let client = make_client();
    client.start().await.unwrap();
    client.stop().await;
    client.stop().await;
    assert_eq!(client.state().await, ClientState::Stopped);
}

#[tokio::test]
async fn stop_without_start_still_stops() {
    let client = make_client();
    client.stop().await;
    assert_eq!(client.state().await, ClientState::Stopped);
}

#[tokio::test]
async fn start_after_stop_is_rejected() {
    let client = make_client();
    client.start().await.unwrap();
    client.stop().await;

    let err = client.start().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ClientShutdown);
    assert_eq!(err.metadata.get("state").map(String::as_str), Some("stopped"));
}

// ── Logging ──────────────────────────────────────────────────────

#[tokio::test]
async fn lifecycle_transitions_are_logged() {
    let (logger, sink) = memory_logger();
    let client = Client::new(make_config(), logger);

    client.start().await.unwrap();
    client.stop().await;

    let messages: Vec<String> = sink.records().iter().map(|r| r.message.clone()).collect();
    assert!(messages.iter().any(|m| m == "client started"));
    assert!(messages.iter().any(|m| m == "client stopped"));
    assert!(
        sink.records()
            .iter()
            .all(|r| r.category == LogCategory::SyncClient)
    );
}

#[tokio::test]
async fn creation_is_logged_at_detail() {
    let (logger, sink) = memory_logger();
    logger.set_level(LogCategory::App, LogLevel::Detail);

    let _client = Client::new(make_config(), logger);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, LogCategory::App);
    assert_eq!(records[0].level, LogLevel::Detail);
    assert!(records[0].message.contains("cairn-test"));
}

#[tokio::test]
async fn monitor_heartbeat_logs_under_the_network_category() {
    let (logger, sink) = memory_logger();
    logger.set_level(LogCategory::Network, LogLevel::Debug);

    let client = Client::new(make_config(), logger);
    client.start().await.unwrap();

    // The monitor's first tick fires immediately after spawn.
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(
        sink.records()
            .iter()
            .any(|r| r.category == LogCategory::Network
                && r.message.contains("connection monitor alive"))
    );

    client.stop().await;
}
