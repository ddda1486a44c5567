// src/convert/output.rs

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::errors::{PrepError, Result};
use crate::types::AdjacencyRecord;

/// Number of trailing file-name characters replaced by `.txt`.
pub const REPLACED_SUFFIX_CHARS: usize = 4;

pub const OUTPUT_EXTENSION: &str = ".txt";

/// Sibling output path for an input dump.
///
/// Drops the last four characters of the file name and appends `.txt`, so
/// `graph1.out` becomes `graph1.txt`. A name that is already `*.txt` maps
/// onto itself.
pub fn output_path_for(input: &Path) -> Result<PathBuf> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PrepError::InvalidInputName(input.to_path_buf()))?;

    let len = name.chars().count();
    if len <= REPLACED_SUFFIX_CHARS {
        return Err(PrepError::InvalidInputName(input.to_path_buf()));
    }

    let stem: String = name.chars().take(len - REPLACED_SUFFIX_CHARS).collect();
    Ok(input.with_file_name(format!("{stem}{OUTPUT_EXTENSION}")))
}

/// Render records as an edge list: one `origin destination` line per edge,
/// each newline-terminated.
pub fn render_edge_list(records: &[AdjacencyRecord]) -> String {
    let mut out = String::new();
    for edge in records.iter().flat_map(|r| r.edges()) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{edge}");
    }
    out
}
