use cairn_client::{AppConfig, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, LogLevel};
use cairn_types::AppId;

fn app_id() -> AppId {
    AppId::new("cairn-demo").unwrap()
}

// ── Defaults & builders ───────────────────────────────────────────

#[test]
fn new_fills_defaults() {
    let config = AppConfig::new(app_id());
    assert_eq!(config.app_id, app_id());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.device_name, "cairn device");
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.sdk_version.is_empty());
}

#[test]
fn builders_override_fields() {
    let config = AppConfig::new(app_id())
        .with_base_url("https://staging.cairndb.dev")
        .with_device_name("laptop")
        .with_request_timeout_ms(5_000)
        .with_log_level(LogLevel::Trace);

    assert_eq!(config.base_url, "https://staging.cairndb.dev");
    assert_eq!(config.device_name, "laptop");
    assert_eq!(config.request_timeout_ms, 5_000);
    assert_eq!(config.log_level, LogLevel::Trace);
}

// ── Value semantics ───────────────────────────────────────────────

#[test]
fn equal_configurations_compare_equal() {
    assert_eq!(AppConfig::new(app_id()), AppConfig::new(app_id()));
    assert_ne!(
        AppConfig::new(app_id()),
        AppConfig::new(app_id()).with_device_name("other")
    );
}

#[test]
fn serialization_roundtrip() {
    let config = AppConfig::new(app_id())
        .with_device_name("laptop")
        .with_log_level(LogLevel::Debug);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: AppConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn serialization_uses_lowercase_level_names() {
    let config = AppConfig::new(app_id()).with_log_level(LogLevel::Detail);
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""log_level":"detail""#));
}
