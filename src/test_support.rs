//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::path::PathBuf;

use crate::core::config::{
    DEFAULT_CHAR_LIMIT, DEFAULT_LABEL, DEFAULT_PLACEHOLDER, ResolvedConfig,
};
use crate::core::state::App;

/// A config with built-in defaults, independent of the environment.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        status_file: PathBuf::from("sprint.txt"),
        char_limit: DEFAULT_CHAR_LIMIT,
        label: DEFAULT_LABEL.to_string(),
        placeholder: DEFAULT_PLACEHOLDER.to_string(),
    }
}

/// Creates a test App in form entry with the default single field.
pub fn test_app() -> App {
    App::from_config(&test_config())
}
