// src/convert/parse.rs

use std::path::Path;

use crate::errors::{PrepError, Result};
use crate::types::AdjacencyRecord;

/// Parse a whole adjacency-list dump.
///
/// Blank (or whitespace-only) lines are skipped. The first malformed line
/// aborts parsing; `file` is only used to label that error.
pub fn parse_adjacency_list(file: &Path, text: &str) -> Result<Vec<AdjacencyRecord>> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = line
            .parse::<AdjacencyRecord>()
            .map_err(|reason| PrepError::MalformedRecord {
                file: file.to_path_buf(),
                line: idx + 1,
                content: line.to_string(),
                reason,
            })?;
        records.push(record);
    }

    Ok(records)
}

/// Total number of edges described by `records`.
pub fn edge_count(records: &[AdjacencyRecord]) -> usize {
    records.iter().map(|r| r.destinations.len()).sum()
}
