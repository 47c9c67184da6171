//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX to avoid
//! interfering with each other.

use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use vitalwatch::config::{load_config, load_config_or_default};
use vitalwatch::domain::VitalwatchError;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("VITALWATCH_APPLICATION_LOG_LEVEL");
    std::env::remove_var("VITALWATCH_MONITOR_INTERVAL_SECONDS");
    std::env::remove_var("VITALWATCH_MONITOR_DURATION_MINUTES");
    std::env::remove_var("VITALWATCH_STORE_PATH");
    std::env::remove_var("VITALWATCH_STORE_SYNC_WRITES");
    std::env::remove_var("TEST_VITALS_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[monitor]
interval_seconds = 5
duration_minutes = 3

[store]
path = "/tmp/vitals/health_data.csv"
sync_writes = false

[logging]
local_enabled = true
local_path = "/tmp/vitalwatch-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.monitor.interval_seconds, 5);
    assert_eq!(config.monitor.duration_minutes, 3);
    assert_eq!(config.store.path, "/tmp/vitals/health_data.csv");
    assert!(!config.store.sync_writes);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/vitalwatch-logs");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[application]\nlog_level = \"warn\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.monitor.interval_seconds, 10);
    assert_eq!(config.monitor.duration_minutes, 1);
    assert_eq!(config.store.path, "health_data.csv");
    assert!(config.store.sync_writes);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_VITALS_DIR", "/var/lib/vitals");

    let temp_file = write_config("[store]\npath = \"${TEST_VITALS_DIR}/health_data.csv\"\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.store.path, "/var/lib/vitals/health_data.csv");
    cleanup_env_vars();
}

#[test]
fn test_env_var_overrides() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("VITALWATCH_MONITOR_INTERVAL_SECONDS", "30");
    std::env::set_var("VITALWATCH_STORE_PATH", "override.csv");
    std::env::set_var("VITALWATCH_STORE_SYNC_WRITES", "false");

    let temp_file = write_config("[monitor]\ninterval_seconds = 5\n");
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.monitor.interval_seconds, 30);
    assert_eq!(config.store.path, "override.csv");
    assert!(!config.store.sync_writes);
    cleanup_env_vars();
}

#[test]
fn test_env_override_with_bad_number_is_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("VITALWATCH_MONITOR_DURATION_MINUTES", "soon");

    let temp_file = write_config("");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(matches!(err, VitalwatchError::Configuration(_)));
    assert!(err.to_string().contains("VITALWATCH_MONITOR_DURATION_MINUTES"));
    cleanup_env_vars();
}

#[test]
fn test_invalid_monitor_values_fail_validation() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[monitor]\ninterval_seconds = 10\nduration_minutes = -1\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("duration_minutes"));
}

#[test]
fn test_invalid_toml_syntax() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[monitor\ninterval_seconds = 10\n");
    let err = load_config(temp_file.path()).unwrap_err();

    assert!(err.to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_missing_default_file_falls_back_to_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = load_config_or_default(dir.path().join("vitalwatch.toml"))
        .expect("Defaults should load");

    assert_eq!(config.monitor.interval_seconds, 10);
    assert_eq!(config.store.path, "health_data.csv");
}
