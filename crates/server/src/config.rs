//! # Application Configuration
//!
//! This module defines the configuration structure for the `relaxgo-server` and
//! the logic for loading it from a `config.yml` file and environment variables.
//!
//! Layers, lowest precedence first:
//! 1. Defaults baked into the structs below.
//! 2. `config.yml` next to the crate manifest, or an explicit path. `${VAR}`
//!    placeholders are substituted from the environment before parsing.
//! 3. Plain environment variables for top-level keys (`PORT`, `API_KEY`, `PROJECT_ID`).
//! 4. `RELAXGO_`-prefixed variables for nested keys (e.g. `RELAXGO_SERVICE__API_URL`).

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use relaxgo::{
    client::{DEFAULT_TABLE_ID, DEFAULT_TABLE_TYPE},
    providers::table::jamai::DEFAULT_API_URL,
};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    #[error("Configuration error: {0}")]
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted size of a form submission, tour package included.
    #[serde(default = "default_upload_limit_bytes")]
    pub upload_limit_bytes: usize,
    /// API key of the generative-table service. Loaded from `API_KEY` env var.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Project of the generative-table service. Loaded from `PROJECT_ID` env var.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Where and how to reach the recommendation table.
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Location of the recommendation table.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_table_type")]
    pub table_type: String,
    #[serde(default = "default_table_id")]
    pub table_id: String,
    /// Upper bound for the single generation request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            table_type: default_table_type(),
            table_id: default_table_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    9090
}

fn default_upload_limit_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_table_type() -> String {
    DEFAULT_TABLE_TYPE.to_string()
}

fn default_table_id() -> String {
    DEFAULT_TABLE_ID.to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// An explicit `config_path_override` must exist. Without one, the crate's
/// `config.yml` is used when present and the built-in defaults otherwise.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            let content = read_and_substitute(&default_path)?;
            match &content {
                Some(_) => info!("Loading configuration from '{default_path}'."),
                None => info!("'{default_path}' not found. Using built-in defaults."),
            }
            content
        }
    };
    if let Some(content) = file_content {
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder
        // Load environment variables for top-level keys like PORT and API_KEY.
        .add_source(Environment::default())
        // Load prefixed environment variables for nested overrides.
        .add_source(
            Environment::with_prefix("RELAXGO")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
