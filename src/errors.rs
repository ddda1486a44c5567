// src/errors.rs

//! Crate-wide error aliases and helpers.

use std::path::PathBuf;

use thiserror::Error;

/// Why a single adjacency-list line could not be parsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("missing ':' delimiter")]
    MissingDelimiter,

    #[error("empty origin before ':'")]
    EmptyOrigin,
}

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("Malformed record in {file:?} at line {line}: {reason} (line: {content:?})")]
    MalformedRecord {
        file: PathBuf,
        line: usize,
        content: String,
        reason: MalformedReason,
    },

    #[error("Invalid input file name {0:?}: need a UTF-8 name longer than 4 characters")]
    InvalidInputName(PathBuf),

    #[error("Source tree not found: {0:?}")]
    MissingSourceTree(PathBuf),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PrepError>;
