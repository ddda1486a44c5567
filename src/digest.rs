// src/digest.rs

//! Content digests for staged trees.
//!
//! A tree digest covers every regular file below a directory: its path
//! relative to that directory and its contents. Two trees with the same
//! digest have the same layout and bytes, which is how repeated staging
//! runs are compared.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blake3::Hasher;
use tracing::debug;

use crate::fs::FileSystem;

/// Compute the hash of a single file.
pub fn compute_file_hash(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    let mut file = fs
        .open_read(path)
        .with_context(|| format!("opening file for hashing: {:?}", path))?;
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().to_hex().to_string())
}

/// All regular files below `root`, as sorted `/`-separated relative paths.
/// Symlinked directories are not followed.
pub fn list_tree_files(fs: &dyn FileSystem, root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if fs.is_symlink(&path) && fs.is_dir(&path) {
                continue;
            } else if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) {
                if let Ok(rel) = path.strip_prefix(root) {
                    files.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Deterministic digest over the relative paths and contents below `root`.
///
/// A missing `root` digests like an empty tree.
pub fn tree_digest(fs: &dyn FileSystem, root: &Path) -> Result<String> {
    let mut hasher = Hasher::new();

    if fs.is_dir(root) {
        for rel in list_tree_files(fs, root)? {
            let file_hash = compute_file_hash(fs, &root.join(&rel))?;
            hasher.update(rel.as_bytes());
            hasher.update(&[0]);
            hasher.update(file_hash.as_bytes());
        }
    }

    let hash = hasher.finalize().to_hex().to_string();
    debug!(root = ?root, hash = %hash, "computed tree digest");
    Ok(hash)
}
