// src/stage/code.rs

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::CodeSection;
use crate::digest::tree_digest;
use crate::errors::{PrepError, Result};
use crate::fs::FileSystem;

/// Outcome of staging the code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Files copied, including the entry point before its removal.
    pub files_copied: usize,
    pub entry_point_removed: bool,
    pub digest: String,
}

/// Replace `<root>/<destination>` with a fresh copy of `<root>/<source>`,
/// minus the entry-point file.
///
/// The source is checked before anything is deleted, so a missing source
/// leaves a previous staged copy untouched.
pub fn stage_code(fs: &dyn FileSystem, root: &Path, code: &CodeSection) -> Result<CodeReport> {
    let source = root.join(&code.source);
    let destination = root.join(&code.destination);

    if !fs.is_dir(&source) {
        return Err(PrepError::MissingSourceTree(source));
    }

    if fs.exists(&destination) {
        debug!(destination = ?destination, "removing previous staged code");
        remove_existing(fs, &destination)?;
    }

    let files_copied = copy_tree(fs, &source, &destination)?;

    let entry_point = destination.join(&code.entry_point);
    let entry_point_removed = if fs.is_file(&entry_point) {
        fs.remove_file(&entry_point)?;
        debug!(entry_point = ?entry_point, "removed entry point from staged code");
        true
    } else {
        warn!(entry_point = ?entry_point, "entry point not present in staged code");
        false
    };

    let digest = tree_digest(fs, &destination)?;
    info!(
        source = ?source,
        destination = ?destination,
        files_copied,
        digest = %digest,
        "staged code tree"
    );

    Ok(CodeReport {
        source,
        destination,
        files_copied,
        entry_point_removed,
        digest,
    })
}

/// Recursively copy `from` into `to` (created if needed). Returns the number
/// of files copied. Entries are visited in sorted order.
///
/// Symlinked files are copied by content; symlinked directories are skipped.
pub fn copy_tree(fs: &dyn FileSystem, from: &Path, to: &Path) -> Result<usize> {
    fs.create_dir_all(to)?;

    let mut entries = fs.read_dir(from)?;
    entries.sort();

    let mut copied = 0;
    for entry in entries {
        let Some(name) = entry.file_name() else {
            continue;
        };
        let target = to.join(name);
        if fs.is_symlink(&entry) && fs.is_dir(&entry) {
            warn!(path = ?entry, "skipping symlinked directory");
        } else if fs.is_dir(&entry) {
            copied += copy_tree(fs, &entry, &target)?;
        } else if fs.is_file(&entry) {
            fs.copy_file(&entry, &target)?;
            debug!(from = ?entry, to = ?target, "copied");
            copied += 1;
        }
    }

    Ok(copied)
}

/// Delete a directory tree, or a stray file squatting on its path.
pub(crate) fn remove_existing(fs: &dyn FileSystem, path: &Path) -> Result<()> {
    if fs.is_dir(path) {
        fs.remove_dir_all(path)?;
    } else {
        fs.remove_file(path)?;
    }
    Ok(())
}
