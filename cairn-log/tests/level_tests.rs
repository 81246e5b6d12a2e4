use cairn_log::{LogError, LogLevel};
use std::str::FromStr;

// ── Ordering ──────────────────────────────────────────────────────

#[test]
fn levels_order_by_verbosity() {
    assert!(LogLevel::Off < LogLevel::Fatal);
    assert!(LogLevel::Fatal < LogLevel::Error);
    assert!(LogLevel::Error < LogLevel::Warn);
    assert!(LogLevel::Warn < LogLevel::Info);
    assert!(LogLevel::Info < LogLevel::Detail);
    assert!(LogLevel::Detail < LogLevel::Debug);
    assert!(LogLevel::Debug < LogLevel::Trace);
    assert!(LogLevel::Trace < LogLevel::All);
}

#[test]
fn threshold_endpoints() {
    assert!(LogLevel::Off.is_threshold_only());
    assert!(LogLevel::All.is_threshold_only());
    for level in [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Detail,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        assert!(!level.is_threshold_only(), "{level} is a record level");
    }
}

// ── Names ─────────────────────────────────────────────────────────

#[test]
fn display_and_parse_roundtrip() {
    for level in [
        LogLevel::Off,
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Detail,
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::All,
    ] {
        let parsed = LogLevel::from_str(&level.to_string()).unwrap();
        assert_eq!(parsed, level);
    }
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(
        LogLevel::from_str("Info"),
        Err(LogError::UnknownLevel("Info".to_string()))
    );
}

#[test]
fn parse_unknown_name_fails() {
    assert_eq!(
        LogLevel::from_str("verbose"),
        Err(LogError::UnknownLevel("verbose".to_string()))
    );
}

#[test]
fn serde_uses_lowercase_names() {
    let json = serde_json::to_string(&LogLevel::Detail).unwrap();
    assert_eq!(json, r#""detail""#);
    let parsed: LogLevel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, LogLevel::Detail);
}
