//! Configuration file discovery and loading.
//!
//! Lookup order:
//! 1. An explicit `--config` path (must exist)
//! 2. `graphgist.yml` in the working directory
//! 3. Built-in defaults
//!
//! Environment overrides are applied last.

use crate::config::schema::GistConfig;
use crate::error::{GistError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "graphgist.yml";

/// Environment variable overriding `cache.freshness_secs`.
pub const FRESHNESS_ENV: &str = "GRAPHGIST_FRESHNESS_SECS";

/// Find the config file for a working directory, if one exists.
pub fn find_config_file(working_dir: &Path) -> Option<PathBuf> {
    let path = working_dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file and parse it into GistConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<GistConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GistError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GistError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into GistConfig.
///
/// An empty document is treated as "all defaults".
pub fn parse_config(content: &str, source_path: &Path) -> Result<GistConfig> {
    if content.trim().is_empty() {
        return Ok(GistConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GistError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply environment overrides to a loaded config.
pub fn apply_env_overrides(config: &mut GistConfig, env: &HashMap<String, String>) {
    if let Some(raw) = env.get(FRESHNESS_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.cache.freshness_secs = secs,
            Err(_) => tracing::warn!("Ignoring invalid {}={:?}", FRESHNESS_ENV, raw),
        }
    }
}

/// Load config with optional path override, then apply process environment.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<GistConfig> {
    let mut config = match config_override {
        Some(path) => load_config_file(path)?,
        None => match find_config_file(working_dir) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                load_config_file(&path)?
            }
            None => GistConfig::default(),
        },
    };

    let env: HashMap<String, String> = std::env::vars().collect();
    apply_env_overrides(&mut config, &env);

    Ok(config)
}
