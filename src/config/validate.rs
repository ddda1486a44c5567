// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{RawStageConfig, StageConfig};
use crate::errors::{PrepError, Result};
use crate::stage::DataPattern;

impl TryFrom<RawStageConfig> for StageConfig {
    type Error = crate::errors::PrepError;

    fn try_from(raw: RawStageConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(StageConfig::new_unchecked(raw.code, raw.data))
    }
}

fn validate_raw_config(cfg: &RawStageConfig) -> Result<()> {
    validate_relative("code.source", &cfg.code.source)?;
    validate_relative("code.destination", &cfg.code.destination)?;
    validate_relative("code.entry_point", &cfg.code.entry_point)?;
    validate_relative("data.source", &cfg.data.source)?;
    validate_relative("data.destination", &cfg.data.destination)?;

    let destinations = [
        ("code.destination", &cfg.code.destination),
        ("data.destination", &cfg.data.destination),
    ];
    let sources = [
        ("code.source", &cfg.code.source),
        ("data.source", &cfg.data.source),
    ];
    for (dest_key, dest) in destinations {
        for (src_key, src) in sources {
            ensure_disjoint(src_key, src, dest_key, dest)?;
        }
    }
    ensure_disjoint(
        "code.destination",
        &cfg.code.destination,
        "data.destination",
        &cfg.data.destination,
    )?;

    validate_pattern(&cfg.data.pattern)?;
    Ok(())
}

/// Paths must stay below the project root: non-empty, relative, no `..`.
fn validate_relative(key: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(PrepError::ConfigError(format!("{key} must not be empty")));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(PrepError::ConfigError(format!(
                    "{key} must not contain '..' (got {:?})",
                    path
                )));
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PrepError::ConfigError(format!(
                    "{key} must be relative to the project root (got {:?})",
                    path
                )));
            }
        }
    }
    if !path.components().any(|c| matches!(c, Component::Normal(_))) {
        return Err(PrepError::ConfigError(format!(
            "{key} must name a directory below the project root (got {:?})",
            path
        )));
    }
    Ok(())
}

/// Staging deletes destinations wholesale, so no destination may equal,
/// contain or sit inside another tree it is paired with.
fn ensure_disjoint(a_key: &str, a: &Path, b_key: &str, b: &Path) -> Result<()> {
    let a = normalized(a);
    let b = normalized(b);
    if a.starts_with(&b) || b.starts_with(&a) {
        return Err(PrepError::ConfigError(format!(
            "{a_key} ({:?}) and {b_key} ({:?}) must not overlap",
            a, b
        )));
    }
    Ok(())
}

fn normalized(path: &Path) -> std::path::PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.contains('/') {
        return Err(PrepError::ConfigError(format!(
            "data.pattern matches file names only and must not contain '/' (got {pattern:?})"
        )));
    }
    DataPattern::new(pattern)?;
    Ok(())
}
