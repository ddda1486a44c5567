// src/stage/data.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DataSection;
use crate::digest::tree_digest;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::stage::code::remove_existing;
use crate::stage::pattern::DataPattern;

/// Outcome of staging the data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Staged file paths, in copy order.
    pub files_copied: Vec<PathBuf>,
    pub digest: String,
}

/// Regular files directly inside `source` whose names match `pattern`,
/// sorted by path.
///
/// A missing source (or one that is not a directory) yields no files.
/// Matching directories are skipped and never descended into.
pub fn matching_data_files(
    fs: &dyn FileSystem,
    source: &Path,
    pattern: &DataPattern,
) -> Result<Vec<PathBuf>> {
    if !fs.exists(source) {
        debug!(source = ?source, "data source absent; nothing to stage");
        return Ok(Vec::new());
    }
    if !fs.is_dir(source) {
        warn!(source = ?source, "data source is not a directory; nothing to stage");
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs
        .read_dir(source)?
        .into_iter()
        .filter(|path| pattern.matches_path(path) && fs.is_file(path))
        .collect();
    files.sort();
    Ok(files)
}

/// Recreate `<root>/<destination>` empty and copy the matching data files
/// into it.
pub fn stage_data(fs: &dyn FileSystem, root: &Path, data: &DataSection) -> Result<DataReport> {
    let pattern = DataPattern::new(&data.pattern)?;
    let source = root.join(&data.source);
    let destination = root.join(&data.destination);

    if fs.exists(&destination) {
        debug!(destination = ?destination, "removing previous staged data");
        remove_existing(fs, &destination)?;
    }
    fs.create_dir_all(&destination)?;

    let mut files_copied = Vec::new();
    for file in matching_data_files(fs, &source, &pattern)? {
        let Some(name) = file.file_name() else {
            continue;
        };
        let target = destination.join(name);
        fs.copy_file(&file, &target)?;
        debug!(from = ?file, to = ?target, "copied");
        files_copied.push(target);
    }

    let digest = tree_digest(fs, &destination)?;
    info!(
        source = ?source,
        destination = ?destination,
        pattern = pattern.as_str(),
        files = files_copied.len(),
        digest = %digest,
        "staged data files"
    );

    Ok(DataReport {
        source,
        destination,
        files_copied,
        digest,
    })
}
