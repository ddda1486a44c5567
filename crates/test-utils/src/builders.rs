#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pathprep::config::model::{DEFAULT_CODE_SOURCE, DEFAULT_DATA_SOURCE};
use pathprep::fs::mock::MockFileSystem;
use tempfile::TempDir;

/// Builder for adjacency-list text (`origin: dest dest ...` lines).
#[derive(Debug, Default)]
pub struct AdjacencyListBuilder {
    lines: Vec<String>,
}

impl AdjacencyListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, origin: &str, destinations: &[&str]) -> Self {
        self.lines.push(format!("{}: {}", origin, destinations.join(" ")));
        self
    }

    /// Append a line verbatim, e.g. a blank or malformed one.
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

/// Builder for an in-memory project laid out like the default staging
/// layout (`dev/src/main/java/com`, `dev/data`).
pub struct MockProjectBuilder {
    fs: MockFileSystem,
    root: PathBuf,
}

impl MockProjectBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let fs = MockFileSystem::new();
        fs.add_dir(&root);
        Self { fs, root }
    }

    /// File under the default code source tree.
    pub fn with_code_file(self, rel: &str, content: &str) -> Self {
        let path = self.root.join(DEFAULT_CODE_SOURCE).join(rel);
        self.fs.add_file(path, content);
        self
    }

    /// File directly under the default data source directory.
    pub fn with_data_file(self, name: &str, content: &str) -> Self {
        let path = self.root.join(DEFAULT_DATA_SOURCE).join(name);
        self.fs.add_file(path, content);
        self
    }

    /// Directory under the default data source directory.
    pub fn with_data_dir(self, name: &str) -> Self {
        let path = self.root.join(DEFAULT_DATA_SOURCE).join(name);
        self.fs.add_dir(path);
        self
    }

    /// Any file, relative to the project root.
    pub fn with_file(self, rel: &str, content: &str) -> Self {
        self.fs.add_file(self.root.join(rel), content);
        self
    }

    pub fn build(self) -> (MockFileSystem, PathBuf) {
        (self.fs, self.root)
    }
}

/// A project on real disk inside a temporary directory.
pub struct TempProject {
    dir: TempDir,
}

impl TempProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        fs::write(&path, content).expect("failed to write file");
        path
    }

    pub fn mkdir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("failed to create dir");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).expect("failed to read file")
    }

    /// Sorted `/`-separated paths of every non-directory entry below `rel`.
    /// Symlinks are listed, never followed.
    pub fn files_under(&self, rel: &str) -> Vec<String> {
        let base = self.path(rel);
        let mut out = Vec::new();
        let mut stack = vec![base.clone()];
        while let Some(dir) = stack.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
                    stack.push(path);
                } else if let Ok(rel) = path.strip_prefix(&base) {
                    out.push(rel.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        out.sort();
        out
    }

    /// Lay out the default code and data sources.
    pub fn with_default_layout(self) -> Self {
        self.write(
            &format!("{DEFAULT_CODE_SOURCE}/uniquepaths/App.java"),
            "class App {}\n",
        );
        self.write(
            &format!("{DEFAULT_CODE_SOURCE}/uniquepaths/UniquePaths.java"),
            "class UniquePaths {}\n",
        );
        self.write(
            &format!("{DEFAULT_CODE_SOURCE}/uniquepaths/util/Graph.java"),
            "class Graph {}\n",
        );
        self.write(&format!("{DEFAULT_DATA_SOURCE}/graph1.txt"), "1 2\n2 3\n");
        self.write(&format!("{DEFAULT_DATA_SOURCE}/graph2.txt"), "a b\n");
        self.write(&format!("{DEFAULT_DATA_SOURCE}/notes.txt"), "ignore me\n");
        self.mkdir(&format!("{DEFAULT_DATA_SOURCE}/graph_dir.txt"));
        self
    }
}

impl Default for TempProject {
    fn default() -> Self {
        Self::new()
    }
}
