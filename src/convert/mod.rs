// src/convert/mod.rs

//! Adjacency-list to edge-list conversion.
//!
//! Each input is read and parsed completely before its output is written,
//! and the output is written atomically, so a malformed input never leaves
//! a partial edge list behind.

pub mod output;
pub mod parse;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

pub use output::{output_path_for, render_edge_list};
pub use parse::{edge_count, parse_adjacency_list};

/// Outcome of converting (or dry-running) one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
    pub edges: usize,
    /// True when the input already had the output name and was replaced.
    pub overwrote_input: bool,
    pub written: bool,
}

/// Convert a single adjacency-list file into its sibling edge-list file.
///
/// With `dry_run`, everything up to the write happens (naming, reading,
/// parsing) and the report describes what would have been written.
pub fn convert_file(fs: &dyn FileSystem, input: &Path, dry_run: bool) -> Result<ConversionReport> {
    let output = output_path_for(input)?;
    let text = fs.read_to_string(input)?;
    let records = parse_adjacency_list(input, &text)?;
    let edges = edge_count(&records);
    debug!(input = ?input, records = records.len(), edges, "parsed adjacency list");

    let overwrote_input = output == input;
    if overwrote_input {
        warn!(input = ?input, "output name equals input name; input will be replaced");
    }

    if !dry_run {
        let rendered = render_edge_list(&records);
        fs.write_atomic(&output, rendered.as_bytes())?;
        info!(input = ?input, output = ?output, edges, "wrote edge list");
    }

    Ok(ConversionReport {
        input: input.to_path_buf(),
        output,
        records: records.len(),
        edges,
        overwrote_input,
        written: !dry_run,
    })
}

/// Convert every input in order, stopping at the first failure.
///
/// Outputs of files converted before the failure are left in place.
pub fn convert_all<P: AsRef<Path>>(
    fs: &dyn FileSystem,
    inputs: &[P],
    dry_run: bool,
) -> Result<Vec<ConversionReport>> {
    let mut reports = Vec::with_capacity(inputs.len());
    for input in inputs {
        reports.push(convert_file(fs, input.as_ref(), dry_run)?);
    }
    Ok(reports)
}
