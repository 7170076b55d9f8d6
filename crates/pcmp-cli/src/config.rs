//! Configuration file loading with precedence handling.
//!
//! Precedence, highest first: CLI flags, environment variables (read by
//! clap), the TOML config file, built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use pcmp_analytics::DEFAULT_MODEL;

/// Directory inside a project that holds the database, config and logs.
pub const PROJECT_DIR_NAME: &str = ".pcmp";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3030;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

/// TOML configuration file structure. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// SQLite database path; relative paths resolve against the project directory.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Model key marked as the default in estimate listings.
    #[serde(default)]
    pub default_model: Option<String>,

    #[serde(default)]
    pub server: Option<ServerSection>,
}

/// `[server]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub database: Option<PathBuf>,
    pub default_model: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub database: PathBuf,
    pub default_model: String,
    pub host: String,
    pub port: u16,
}

impl ResolvedConfig {
    /// Built-in defaults for a project directory.
    pub fn defaults(project_dir: &Path) -> Self {
        Self {
            database: project_dir.join(PROJECT_DIR_NAME).join("pcmp.db"),
            default_model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Load a config file. A missing file is `Ok(None)`.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Config file locations, in lookup order.
pub fn config_candidates(project_dir: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![project_dir.join(PROJECT_DIR_NAME).join("config.toml")];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("pcmp").join("config.toml"));
    }
    candidates
}

/// Load the first config file that exists.
pub fn find_config_file(project_dir: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    for path in config_candidates(project_dir) {
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading config file");
            return load_config_file(path);
        }
    }
    Ok(None)
}

/// Merge a config file over the defaults.
pub fn merge_config(project_dir: &Path, config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::defaults(project_dir);

    let Some(config) = config_file else {
        return defaults;
    };
    let server = config.server.unwrap_or_default();

    ResolvedConfig {
        database: config
            .database
            .map(|path| project_dir.join(path))
            .unwrap_or(defaults.database),
        default_model: config.default_model.unwrap_or(defaults.default_model),
        host: server.host.unwrap_or(defaults.host),
        port: server.port.unwrap_or(defaults.port),
    }
}

/// Apply CLI and environment overrides.
pub fn apply_overrides(mut config: ResolvedConfig, overrides: Overrides) -> ResolvedConfig {
    if let Some(database) = overrides.database {
        config.database = database;
    }
    if let Some(model) = overrides.default_model {
        config.default_model = model;
    }
    if let Some(host) = overrides.host {
        config.host = host;
    }
    if let Some(port) = overrides.port {
        config.port = port;
    }
    config
}

/// Resolve the full configuration for a project.
pub fn resolve(project_dir: &Path, overrides: Overrides) -> Result<ResolvedConfig, ConfigError> {
    let file = find_config_file(project_dir)?;
    Ok(apply_overrides(merge_config(project_dir, file), overrides))
}
