// src/stage/pattern.rs

use std::fmt;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::errors::{PrepError, Result};

/// Compiled file-name glob deciding which data files get staged.
///
/// Matching looks at a bare file name (e.g. `"graph1.txt"`), never at a
/// path, so it can be tested without touching a filesystem.
#[derive(Clone)]
pub struct DataPattern {
    source: String,
    matcher: GlobMatcher,
}

impl fmt::Debug for DataPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataPattern")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl DataPattern {
    pub fn new(pattern: &str) -> Result<Self> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                PrepError::ConfigError(format!("invalid data.pattern {pattern:?}: {e}"))
            })?;
        Ok(Self {
            source: pattern.to_string(),
            matcher: glob.compile_matcher(),
        })
    }

    /// The glob this pattern was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if a file called `name` should be staged.
    pub fn matches_name(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }

    /// Like [`matches_name`](Self::matches_name), applied to the last path
    /// component. Paths without a UTF-8 file name never match.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.matches_name(name))
    }
}
