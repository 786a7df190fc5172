//! Configuration file loading with precedence handling.

use crate::registrar::DEFAULT_OPT_IN_MARKER;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "TABLESORT_CONFIG";

/// Env var overriding the opt-in marker.
pub const MARKER_ENV_VAR: &str = "TABLESORT_OPT_IN_MARKER";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tablesort/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Class token a table must carry to become sortable.
    #[serde(default)]
    pub opt_in_marker: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Show each row's original position in the viewer.
    #[serde(default)]
    pub show_row_numbers: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Opt-in class token.
    pub opt_in_marker: String,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Row number column in the viewer.
    pub show_row_numbers: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            opt_in_marker: DEFAULT_OPT_IN_MARKER.to_string(),
            log_file_path: default_log_path(),
            show_row_numbers: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tablesort/tablesort.log` on Linux, or the
/// current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tablesort").join("tablesort.log")
    } else {
        PathBuf::from("tablesort.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
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

/// Resolve default config file path (`~/.config/tablesort/config.toml` on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tablesort").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABLESORT_CONFIG` environment variable
/// 3. Default path
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        opt_in_marker: config.opt_in_marker.unwrap_or(defaults.opt_in_marker),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        show_row_numbers: config.show_row_numbers.unwrap_or(defaults.show_row_numbers),
    }
}

/// Apply environment variable overrides (`TABLESORT_OPT_IN_MARKER`).
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(marker) = std::env::var(MARKER_ENV_VAR) {
        if !marker.trim().is_empty() {
            config.opt_in_marker = marker.trim().to_string();
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed are applied.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    marker_override: Option<String>,
    row_numbers_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(marker) = marker_override {
        config.opt_in_marker = marker;
    }

    if let Some(show) = row_numbers_override {
        config.show_row_numbers = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
