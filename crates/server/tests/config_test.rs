//! # Configuration Tests
//!
//! This file contains tests for the configuration loading logic: the YAML
//! file, `${VAR}` substitution and the environment overrides layered on top.
//! Tests touching the process environment run serially.

use relaxgo_server::config::{get_config, ConfigError};
use serial_test::serial;
use std::env;
use std::fs;
use tempfile::{tempdir, TempDir};

/// A helper function to clear all environment variables read by `get_config`.
/// This ensures a clean slate before each test runs.
fn clear_env_vars() {
    for var in [
        "PORT",
        "API_KEY",
        "PROJECT_ID",
        "UPLOAD_LIMIT_BYTES",
        "RELAXGO_SERVICE__API_URL",
        "RELAXGO_SERVICE__TABLE_ID",
        "RELAXGO_SERVICE__TIMEOUT_SECS",
        "RELAXGO_TEST_SECRET",
    ] {
        env::remove_var(var);
    }
}

/// Writes `content` to a `config.yml` in a fresh temp dir.
fn write_config(content: &str) -> (TempDir, String) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.yml");
    fs::write(&path, content).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

#[test]
#[serial]
fn test_get_config_reads_file_and_fills_defaults() {
    clear_env_vars();
    let (_dir, path) = write_config("port: 8181\nupload_limit_bytes: 2048\n");

    let config = get_config(Some(&path)).expect("Configuration should load successfully");

    assert_eq!(config.port, 8181);
    assert_eq!(config.upload_limit_bytes, 2048);
    assert!(config.api_key.is_none());
    assert!(config.project_id.is_none());
    assert_eq!(config.service.api_url, "https://api.jamaibase.com");
    assert_eq!(config.service.table_type, "action");
    assert_eq!(config.service.table_id, "RelaxingGO");
    assert_eq!(config.service.timeout_secs, 300);
}

#[test]
#[serial]
fn test_get_config_substitutes_placeholders_from_env() {
    clear_env_vars();
    env::set_var("RELAXGO_TEST_SECRET", "sk-from-env");
    let (_dir, path) = write_config("api_key: \"${RELAXGO_TEST_SECRET}\"\n");

    let config = get_config(Some(&path)).unwrap();

    assert_eq!(config.api_key.as_deref(), Some("sk-from-env"));
    clear_env_vars();
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    clear_env_vars();
    let (_dir, path) = write_config(
        "port: 8181\nservice:\n  table_id: \"FromFile\"\n  api_url: \"http://file.example\"\n",
    );
    env::set_var("PORT", "9999");
    env::set_var("API_KEY", "env-key");
    env::set_var("PROJECT_ID", "env-project");
    env::set_var("RELAXGO_SERVICE__TABLE_ID", "FromEnv");

    let config = get_config(Some(&path)).unwrap();

    assert_eq!(config.port, 9999);
    assert_eq!(config.api_key.as_deref(), Some("env-key"));
    assert_eq!(config.project_id.as_deref(), Some("env-project"));
    assert_eq!(config.service.table_id, "FromEnv");
    assert_eq!(config.service.api_url, "http://file.example");
    clear_env_vars();
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_an_error() {
    clear_env_vars();
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.yml");

    let result = get_config(Some(path.to_str().unwrap()));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
#[serial]
fn test_get_config_invalid_port() {
    clear_env_vars();
    let (_dir, path) = write_config("port: 8181\n");
    env::set_var("PORT", "not-a-number");

    let result = get_config(Some(&path));

    assert!(matches!(result, Err(ConfigError::General(_))));
    clear_env_vars();
}
