// tests/config_layout.rs

use std::io::Write;
use std::path::{Path, PathBuf};

use pathprep::config::{load_and_validate, load_for_root, RawStageConfig, StageConfig};
use pathprep::errors::PrepError;
use pathprep_test_utils::builders::TempProject;
use tempfile::NamedTempFile;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

fn expect_config_error(contents: &str, needle: &str) {
    let file = config_file(contents);
    match load_and_validate(file.path()) {
        Err(PrepError::ConfigError(msg)) => {
            assert!(msg.contains(needle), "message {msg:?} lacks {needle:?}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_file_gives_default_layout() {
    let cfg = load_and_validate(config_file("").path()).unwrap();

    assert_eq!(cfg.code.source, PathBuf::from("dev/src/main/java/com"));
    assert_eq!(cfg.code.destination, PathBuf::from("com"));
    assert_eq!(cfg.code.entry_point, PathBuf::from("uniquepaths/App.java"));
    assert_eq!(cfg.data.source, PathBuf::from("dev/data"));
    assert_eq!(cfg.data.destination, PathBuf::from("data"));
    assert_eq!(cfg.data.pattern, "graph*.txt");
}

#[test]
fn built_in_layout_passes_validation() {
    let cfg = StageConfig::try_from(RawStageConfig::default()).unwrap();
    let default = StageConfig::default();
    assert_eq!(cfg.code, default.code);
    assert_eq!(cfg.data, default.data);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let file = config_file(
        r#"
[data]
pattern = "*.edges"
"#,
    );
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.data.pattern, "*.edges");
    assert_eq!(cfg.data.source, PathBuf::from("dev/data"));
    assert_eq!(cfg.code.destination, PathBuf::from("com"));
}

#[test]
fn unknown_keys_are_rejected() {
    let file = config_file(
        r#"
[code]
sauce = "src"
"#,
    );
    assert!(matches!(
        load_and_validate(file.path()),
        Err(PrepError::TomlError(_))
    ));
}

#[test]
fn absolute_paths_are_rejected() {
    expect_config_error(
        r#"
[code]
destination = "/tmp/com"
"#,
        "code.destination must be relative",
    );
}

#[test]
fn parent_components_are_rejected() {
    expect_config_error(
        r#"
[data]
destination = "../elsewhere"
"#,
        "data.destination must not contain '..'",
    );
}

#[test]
fn current_dir_alone_is_rejected() {
    expect_config_error(
        r#"
[data]
destination = "."
"#,
        "data.destination must name a directory",
    );
}

#[test]
fn destination_inside_source_is_rejected() {
    expect_config_error(
        r#"
[code]
source = "src"
destination = "src/staged"
"#,
        "must not overlap",
    );
}

#[test]
fn source_inside_destination_is_rejected() {
    expect_config_error(
        r#"
[data]
source = "out/raw"
destination = "out"
"#,
        "must not overlap",
    );
}

#[test]
fn overlapping_destinations_are_rejected() {
    expect_config_error(
        r#"
[code]
destination = "staged"

[data]
destination = "./staged"
"#,
        "code.destination",
    );
}

#[test]
fn pattern_with_separator_is_rejected() {
    expect_config_error(
        r#"
[data]
pattern = "sub/graph*.txt"
"#,
        "must not contain '/'",
    );
}

#[test]
fn invalid_glob_is_rejected() {
    expect_config_error(
        r#"
[data]
pattern = "graph[.txt"
"#,
        "invalid data.pattern",
    );
}

#[test]
fn missing_explicit_config_is_an_error() {
    let project = TempProject::new();
    let result = load_for_root(project.root(), Some(Path::new("/definitely/not/here.toml")));
    match result {
        Err(PrepError::ConfigError(msg)) => {
            assert!(msg.contains("/definitely/not/here.toml"), "message: {msg}");
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn explicit_config_wins_over_project_file() {
    let project = TempProject::new();
    project.write("Stage.toml", "[data]\npattern = \"from-root*\"\n");
    let explicit = project.write("other.toml", "[data]\npattern = \"explicit*\"\n");

    let cfg = load_for_root(project.root(), Some(&explicit)).unwrap();
    assert_eq!(cfg.data.pattern, "explicit*");

    let cfg = load_for_root(project.root(), None).unwrap();
    assert_eq!(cfg.data.pattern, "from-root*");
}

#[test]
fn no_layout_file_uses_defaults() {
    let project = TempProject::new();
    let cfg = load_for_root(project.root(), None).unwrap();
    assert_eq!(cfg.data.pattern, "graph*.txt");
}
