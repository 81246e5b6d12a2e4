use cairn_client::{App, AppConfig, ClientState, ErrorCategory, ErrorCode, SDK_NAME};
use cairn_log::{LogCategory, LogLevel, Logger, MemorySink};
use cairn_types::AppId;
use serial_test::serial;
use std::sync::Arc;

fn make_config(id: &str) -> AppConfig {
    AppConfig::new(AppId::new(id).unwrap()).with_device_name("test device")
}

// ── Configuration snapshot ────────────────────────────────────────

#[test]
fn config_returns_the_construction_snapshot() {
    let config = make_config("snapshot-app");
    let app = App::with_logger(config.clone(), Logger::disabled());

    assert_eq!(*app.config(), config);
    // Repeated reads are value-equal.
    assert_eq!(app.config(), app.config());
}

#[test]
fn finalized_client_config_carries_the_snapshot() {
    let config = make_config("finalize-app").with_request_timeout_ms(5_000);
    let app = App::with_logger(config, Logger::disabled());

    let client_config = app.client().config().clone();
    assert_eq!(client_config.app_id.as_str(), "finalize-app");
    assert_eq!(client_config.device_name, "test device");
    assert_eq!(client_config.sdk_name, SDK_NAME);
    assert_eq!(client_config.request_timeout.as_millis(), 5_000);
}

// ── Shared client ownership ───────────────────────────────────────

#[test]
fn client_returns_the_same_instance_every_time() {
    let app = App::with_logger(make_config("shared-app"), Logger::disabled());
    let a = app.client();
    let b = app.client();
    assert!(Arc::ptr_eq(&a, &b));
}

// ── Logger wiring ─────────────────────────────────────────────────

#[test]
fn configured_level_becomes_the_root_threshold() {
    let logger = Logger::new(Arc::new(MemorySink::new()));
    let config = make_config("level-app").with_log_level(LogLevel::Debug);
    let app = App::with_logger(config, logger);

    assert_eq!(app.logger().level_for(LogCategory::Root), LogLevel::Debug);
    assert_eq!(
        app.logger().level_for(LogCategory::Network),
        LogLevel::Debug
    );
}

// ── App cache ─────────────────────────────────────────────────────

#[test]
#[serial]
fn get_or_create_returns_one_handle_per_id() {
    App::clear_cached();

    let first = App::get_or_create(make_config("cached-app"));
    let second = App::get_or_create(make_config("cached-app"));
    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&first.client(), &second.client()));

    let other = App::get_or_create(make_config("other-app"));
    assert!(!Arc::ptr_eq(&first, &other));

    App::clear_cached();
}

#[test]
#[serial]
fn cached_looks_up_without_creating() {
    App::clear_cached();
    let id = AppId::new("lookup-app").unwrap();

    assert!(App::cached(&id).is_none());
    let app = App::get_or_create(make_config("lookup-app"));
    let cached = App::cached(&id).unwrap();
    assert!(Arc::ptr_eq(&app, &cached));

    App::clear_cached();
    assert!(App::cached(&id).is_none());
}

// ── Lifecycle pass-through ────────────────────────────────────────

#[tokio::test]
async fn start_and_stop_drive_the_client() {
    let app = App::with_logger(make_config("lifecycle-app"), Logger::disabled());
    assert_eq!(app.state().await, ClientState::Idle);

    app.start().await.unwrap();
    assert_eq!(app.state().await, ClientState::Running);

    app.stop().await;
    assert_eq!(app.state().await, ClientState::Stopped);
}

#[tokio::test]
async fn start_errors_arrive_translated() {
    let app = App::with_logger(make_config("error-app"), Logger::disabled());
    app.start().await.unwrap();

    let err = app.start().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ClientAlreadyRunning);
    assert_eq!(err.category(), ErrorCategory::Client);
    assert!(!err.message().is_empty());

    app.stop().await;
}
