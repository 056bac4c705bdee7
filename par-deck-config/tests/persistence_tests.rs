//! Round-trip and failure tests for config persistence.

use par_deck_config::{Config, ConfigError, LogLevel};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_save_then_load_preserves_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config {
        split_capacity: 3,
        reorder_settle_ms: 100,
        home_title: "Start".to_string(),
        log_level: LogLevel::Debug,
    };
    config.save_to(&path).expect("save should succeed");

    assert!(path.exists(), "save should create parent directories");
    assert!(
        !path.with_extension("yaml.tmp").exists(),
        "temp file should be renamed away"
    );

    let loaded = Config::load_from(&path).expect("load should succeed");
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_invalid_capacity() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "split_capacity: 9\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("split_capacity")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_reports_parse_errors() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "split_capacity: [not, a, number\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("absent.yaml");

    assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));
}

#[test]
fn test_log_level_serializes_lowercase() {
    let config = Config {
        log_level: LogLevel::Trace,
        ..Config::default()
    };
    let yaml = serde_yaml_ng::to_string(&config).unwrap();
    assert!(yaml.contains("log_level: trace"), "yaml was: {yaml}");
}
