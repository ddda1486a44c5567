// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_CODE_SOURCE: &str = "dev/src/main/java/com";
pub const DEFAULT_CODE_DESTINATION: &str = "com";
pub const DEFAULT_ENTRY_POINT: &str = "uniquepaths/App.java";
pub const DEFAULT_DATA_SOURCE: &str = "dev/data";
pub const DEFAULT_DATA_DESTINATION: &str = "data";
pub const DEFAULT_DATA_PATTERN: &str = "graph*.txt";

/// Staging layout as read from a TOML file.
///
/// ```toml
/// [code]
/// source = "dev/src/main/java/com"
/// destination = "com"
/// entry_point = "uniquepaths/App.java"
///
/// [data]
/// source = "dev/data"
/// destination = "data"
/// pattern = "graph*.txt"
/// ```
///
/// All sections and keys are optional; the defaults are the layout above.
/// Every path is relative to the project root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStageConfig {
    #[serde(default)]
    pub code: CodeSection,

    #[serde(default)]
    pub data: DataSection,
}

/// Validated staging layout. Build it with `StageConfig::try_from`.
#[derive(Debug, Clone)]
pub struct StageConfig {
    pub code: CodeSection,
    pub data: DataSection,
}

impl StageConfig {
    /// Internal constructor used by validation.
    pub(crate) fn new_unchecked(code: CodeSection, data: DataSection) -> Self {
        Self { code, data }
    }
}

impl Default for StageConfig {
    /// The built-in layout. It is known to pass validation.
    fn default() -> Self {
        Self::new_unchecked(CodeSection::default(), DataSection::default())
    }
}

/// `[code]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodeSection {
    /// Tree copied recursively. Must exist when staging.
    #[serde(default = "default_code_source")]
    pub source: PathBuf,

    /// Replaced wholesale on every run.
    #[serde(default = "default_code_destination")]
    pub destination: PathBuf,

    /// Driver file removed from the copy, relative to `destination`.
    #[serde(default = "default_entry_point")]
    pub entry_point: PathBuf,
}

fn default_code_source() -> PathBuf {
    PathBuf::from(DEFAULT_CODE_SOURCE)
}

fn default_code_destination() -> PathBuf {
    PathBuf::from(DEFAULT_CODE_DESTINATION)
}

fn default_entry_point() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRY_POINT)
}

impl Default for CodeSection {
    fn default() -> Self {
        Self {
            source: default_code_source(),
            destination: default_code_destination(),
            entry_point: default_entry_point(),
        }
    }
}

/// `[data]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    /// Directory scanned (non-recursively) for data files. May be absent.
    #[serde(default = "default_data_source")]
    pub source: PathBuf,

    /// Recreated empty on every run, then filled with the matches.
    #[serde(default = "default_data_destination")]
    pub destination: PathBuf,

    /// Glob matched against file names only.
    #[serde(default = "default_data_pattern")]
    pub pattern: String,
}

fn default_data_source() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_SOURCE)
}

fn default_data_destination() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DESTINATION)
}

fn default_data_pattern() -> String {
    DEFAULT_DATA_PATTERN.to_string()
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            source: default_data_source(),
            destination: default_data_destination(),
            pattern: default_data_pattern(),
        }
    }
}
