// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawStageConfig, StageConfig};
use crate::errors::{PrepError, Result};

/// File name looked up in the project root when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "Stage.toml";

/// Load a layout file from a given path and return the raw `RawStageConfig`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawStageConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| PrepError::ConfigError(format!("reading {path:?}: {e}")))?;

    let config: RawStageConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a layout file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<StageConfig> {
    let raw_config = load_from_path(&path)?;
    let config = StageConfig::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the layout for a project:
///
/// - an explicit path must exist and is used as-is;
/// - otherwise `<root>/Stage.toml` is used if present;
/// - otherwise the built-in layout.
pub fn load_for_root(root: &Path, explicit: Option<&Path>) -> Result<StageConfig> {
    if let Some(path) = explicit {
        debug!(path = ?path, "loading staging layout");
        return load_and_validate(path);
    }

    let candidate = default_config_path(root);
    if candidate.is_file() {
        debug!(path = ?candidate, "loading staging layout from project root");
        return load_and_validate(&candidate);
    }

    debug!("no layout file found; using built-in staging layout");
    Ok(StageConfig::default())
}

/// `<root>/Stage.toml`.
pub fn default_config_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CONFIG_FILE)
}
