//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sprint/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::status_file::DEFAULT_STATUS_FILE;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SprintConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub status_file: Option<PathBuf>,
    pub char_limit: Option<usize>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CHAR_LIMIT: usize = 2;
pub const DEFAULT_LABEL: &str = "> ";
pub const DEFAULT_PLACEHOLDER: &str = "Time in minutes";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub status_file: PathBuf,
    pub char_limit: usize,
    pub label: String,
    pub placeholder: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&SprintConfig::default(), None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sprint/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sprint").join("config.toml"))
}

/// Load config from `~/.sprint/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SprintConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SprintConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(SprintConfig::default());
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SprintConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SprintConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: SprintConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sprint Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# status_file = "sprint.txt"         # Relative to the working directory, or SPRINT_STATUS_FILE
# char_limit = 2                     # Maximum characters in the minutes field
# label = "> "
# placeholder = "Time in minutes"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_status_file` is from the `--status-file` flag (None = not specified).
pub fn resolve(config: &SprintConfig, cli_status_file: Option<&Path>) -> ResolvedConfig {
    // Status file: CLI → env → config → default
    let status_file = cli_status_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("SPRINT_STATUS_FILE").map(PathBuf::from))
        .or_else(|| config.general.status_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_FILE));

    let char_limit = match config.general.char_limit {
        Some(0) => {
            warn!("char_limit = 0 would make input impossible, using {}", DEFAULT_CHAR_LIMIT);
            DEFAULT_CHAR_LIMIT
        }
        Some(n) => n,
        None => DEFAULT_CHAR_LIMIT,
    };

    ResolvedConfig {
        status_file,
        char_limit,
        label: config
            .general
            .label
            .clone()
            .unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        placeholder: config
            .general
            .placeholder
            .clone()
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
    }
}
