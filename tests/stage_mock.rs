mod common;
use crate::common::{init_tracing, TestResult};

use std::path::{Path, PathBuf};

use pathprep::config::StageConfig;
use pathprep::digest::{list_tree_files, tree_digest};
use pathprep::errors::PrepError;
use pathprep::fs::FileSystem;
use pathprep::stage::{plan, stage, stage_code, stage_data};
use pathprep_test_utils::builders::MockProjectBuilder;

fn sample_project() -> MockProjectBuilder {
    MockProjectBuilder::new("/proj")
        .with_code_file("uniquepaths/App.java", "class App {}")
        .with_code_file("uniquepaths/UniquePaths.java", "class UniquePaths {}")
        .with_code_file("uniquepaths/mr/GraphMapper.java", "class GraphMapper {}")
        .with_code_file("uniquepaths/util/Graph.java", "class Graph {}")
        .with_data_file("graph1.txt", "1 2\n")
        .with_data_file("graph22.txt", "3 4\n")
        .with_data_file("notes.txt", "not a graph")
        .with_data_file("graph3.csv", "wrong extension")
        .with_data_file("mygraph1.txt", "wrong prefix")
        .with_data_dir("graph_folder.txt")
}

#[test]
fn code_copy_excludes_entry_point() -> TestResult {
    init_tracing();

    let (fs, root) = sample_project().build();
    let report = stage_code(&fs, &root, &StageConfig::default().code)?;

    assert_eq!(report.destination, PathBuf::from("/proj/com"));
    assert_eq!(report.files_copied, 4);
    assert!(report.entry_point_removed);
    assert_eq!(
        list_tree_files(&fs, Path::new("/proj/com"))?,
        vec![
            "uniquepaths/UniquePaths.java",
            "uniquepaths/mr/GraphMapper.java",
            "uniquepaths/util/Graph.java",
        ]
    );
    assert!(!fs.exists(Path::new("/proj/com/uniquepaths/App.java")));
    // The source keeps its entry point.
    assert!(fs.is_file(Path::new("/proj/dev/src/main/java/com/uniquepaths/App.java")));
    Ok(())
}

#[test]
fn code_copy_keeps_contents() -> TestResult {
    let (fs, root) = sample_project().build();
    stage_code(&fs, &root, &StageConfig::default().code)?;

    assert_eq!(
        fs.read_to_string(Path::new("/proj/com/uniquepaths/util/Graph.java"))?,
        "class Graph {}"
    );
    Ok(())
}

#[test]
fn missing_code_source_is_fatal_and_keeps_previous_copy() {
    init_tracing();

    let (fs, root) = MockProjectBuilder::new("/proj")
        .with_file("com/uniquepaths/Old.java", "old")
        .build();

    let result = stage_code(&fs, &root, &StageConfig::default().code);

    match result {
        Err(PrepError::MissingSourceTree(path)) => {
            assert_eq!(path, PathBuf::from("/proj/dev/src/main/java/com"));
        }
        other => panic!("Expected MissingSourceTree, got: {:?}", other),
    }
    assert!(fs.is_file(Path::new("/proj/com/uniquepaths/Old.java")));
}

#[test]
fn stale_code_files_do_not_survive() -> TestResult {
    let (fs, root) = sample_project()
        .with_file("com/uniquepaths/Stale.java", "stale")
        .build();

    stage_code(&fs, &root, &StageConfig::default().code)?;

    assert!(!fs.exists(Path::new("/proj/com/uniquepaths/Stale.java")));
    Ok(())
}

#[test]
fn missing_entry_point_is_tolerated() -> TestResult {
    init_tracing();

    let (fs, root) = MockProjectBuilder::new("/proj")
        .with_code_file("uniquepaths/UniquePaths.java", "class UniquePaths {}")
        .build();

    let report = stage_code(&fs, &root, &StageConfig::default().code)?;

    assert!(!report.entry_point_removed);
    assert_eq!(report.files_copied, 1);
    Ok(())
}

#[test]
fn data_staging_copies_only_matching_files() -> TestResult {
    init_tracing();

    let (fs, root) = sample_project().build();
    let report = stage_data(&fs, &root, &StageConfig::default().data)?;

    assert_eq!(
        report.files_copied,
        vec![
            PathBuf::from("/proj/data/graph1.txt"),
            PathBuf::from("/proj/data/graph22.txt"),
        ]
    );
    assert_eq!(
        list_tree_files(&fs, Path::new("/proj/data"))?,
        vec!["graph1.txt", "graph22.txt"]
    );
    // Matching directories are neither copied nor created.
    assert!(!fs.exists(Path::new("/proj/data/graph_folder.txt")));
    assert_eq!(fs.read_to_string(Path::new("/proj/data/graph22.txt"))?, "3 4\n");
    Ok(())
}

#[test]
fn missing_data_source_yields_empty_destination() -> TestResult {
    init_tracing();

    let (fs, root) = MockProjectBuilder::new("/proj")
        .with_file("data/old_graph.txt", "old")
        .build();

    let report = stage_data(&fs, &root, &StageConfig::default().data)?;

    assert!(report.files_copied.is_empty());
    assert!(fs.is_dir(Path::new("/proj/data")));
    assert!(list_tree_files(&fs, Path::new("/proj/data"))?.is_empty());
    Ok(())
}

#[test]
fn data_source_that_is_a_file_yields_nothing() -> TestResult {
    init_tracing();

    let (fs, root) = MockProjectBuilder::new("/proj")
        .with_file("dev/data", "not a directory")
        .build();

    let report = stage_data(&fs, &root, &StageConfig::default().data)?;
    assert!(report.files_copied.is_empty());
    Ok(())
}

#[test]
fn staging_twice_is_idempotent() -> TestResult {
    init_tracing();

    let (fs, root) = sample_project().build();
    let cfg = StageConfig::default();

    let first = stage(&fs, &root, &cfg)?;
    let code_files = list_tree_files(&fs, Path::new("/proj/com"))?;
    let data_files = list_tree_files(&fs, Path::new("/proj/data"))?;

    let second = stage(&fs, &root, &cfg)?;

    assert_eq!(first, second);
    assert_eq!(list_tree_files(&fs, Path::new("/proj/com"))?, code_files);
    assert_eq!(list_tree_files(&fs, Path::new("/proj/data"))?, data_files);
    Ok(())
}

#[test]
fn digest_tracks_staged_contents() -> TestResult {
    let (fs, root) = sample_project().build();
    let cfg = StageConfig::default();

    let before = stage(&fs, &root, &cfg)?;
    fs.add_file("/proj/dev/data/graph1.txt", "1 2\n2 3\n");
    let after = stage(&fs, &root, &cfg)?;

    assert_eq!(before.code.digest, after.code.digest);
    assert_ne!(before.data.digest, after.data.digest);
    assert_eq!(after.data.digest, tree_digest(&fs, Path::new("/proj/data"))?);
    Ok(())
}

#[test]
fn code_failure_skips_data_staging() {
    init_tracing();

    let (fs, root) = MockProjectBuilder::new("/proj")
        .with_data_file("graph1.txt", "1 2\n")
        .build();

    let result = stage(&fs, &root, &StageConfig::default());

    assert!(matches!(result, Err(PrepError::MissingSourceTree(_))));
    assert!(!fs.exists(Path::new("/proj/data")));
}

#[test]
fn plan_lists_work_without_changing_anything() -> TestResult {
    init_tracing();

    let (fs, root) = sample_project()
        .with_file("data/old.txt", "old")
        .build();

    let plan = plan(&fs, &root, &StageConfig::default())?;

    assert_eq!(
        plan.code_files,
        vec![
            "uniquepaths/UniquePaths.java",
            "uniquepaths/mr/GraphMapper.java",
            "uniquepaths/util/Graph.java",
        ]
    );
    assert!(!plan.replaces_code);
    assert!(plan.replaces_data);
    assert_eq!(
        plan.data_files,
        vec![
            PathBuf::from("/proj/dev/data/graph1.txt"),
            PathBuf::from("/proj/dev/data/graph22.txt"),
        ]
    );
    assert!(!fs.exists(Path::new("/proj/com")));
    assert!(fs.is_file(Path::new("/proj/data/old.txt")));
    Ok(())
}
