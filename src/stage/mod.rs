// src/stage/mod.rs

//! Build staging: copy the code tree and the graph data files into their
//! disposable destinations under a project root.
//!
//! Both steps replace their destination wholesale, so running twice gives
//! the same result as running once.

pub mod code;
pub mod data;
pub mod pattern;

use std::path::{Component, Path, PathBuf};

use crate::config::StageConfig;
use crate::digest::list_tree_files;
use crate::errors::{PrepError, Result};
use crate::fs::FileSystem;

pub use code::{copy_tree, stage_code, CodeReport};
pub use data::{matching_data_files, stage_data, DataReport};
pub use pattern::DataPattern;

/// Outcome of a full staging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub code: CodeReport,
    pub data: DataReport,
}

/// Run code staging, then data staging. A code failure aborts before any
/// data is touched.
pub fn stage(fs: &dyn FileSystem, root: &Path, cfg: &StageConfig) -> Result<StageReport> {
    let code = stage_code(fs, root, &cfg.code)?;
    let data = stage_data(fs, root, &cfg.data)?;
    Ok(StageReport { code, data })
}

/// What a staging run would do, computed without changing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagePlan {
    pub code_source: PathBuf,
    pub code_destination: PathBuf,
    /// Code files that would end up staged (entry point excluded), relative
    /// to the code destination.
    pub code_files: Vec<String>,
    pub replaces_code: bool,
    pub data_source: PathBuf,
    pub data_destination: PathBuf,
    pub data_files: Vec<PathBuf>,
    pub replaces_data: bool,
}

/// Compute a [`StagePlan`]. Fails like [`stage`] when the code source is
/// missing.
pub fn plan(fs: &dyn FileSystem, root: &Path, cfg: &StageConfig) -> Result<StagePlan> {
    let code_source = root.join(&cfg.code.source);
    let code_destination = root.join(&cfg.code.destination);
    if !fs.is_dir(&code_source) {
        return Err(PrepError::MissingSourceTree(code_source));
    }

    let entry_point = cfg
        .code
        .entry_point
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    let code_files = list_tree_files(fs, &code_source)?
        .into_iter()
        .filter(|rel| *rel != entry_point)
        .collect();

    let pattern = DataPattern::new(&cfg.data.pattern)?;
    let data_source = root.join(&cfg.data.source);
    let data_destination = root.join(&cfg.data.destination);
    let data_files = matching_data_files(fs, &data_source, &pattern)?;

    Ok(StagePlan {
        replaces_code: fs.exists(&code_destination),
        replaces_data: fs.exists(&data_destination),
        code_source,
        code_destination,
        code_files,
        data_source,
        data_destination,
        data_files,
    })
}
