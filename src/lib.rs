// src/lib.rs

pub mod cli;
pub mod config;
pub mod convert;
pub mod digest;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod stage;
pub mod types;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{ConvertArgs, StageArgs};
use crate::config::{load_for_root, StageConfig};
use crate::convert::{convert_all, ConversionReport};
use crate::fs::RealFileSystem;
use crate::stage::StagePlan;

/// High-level entry point used by the `convert` binary.
pub fn run_convert(args: ConvertArgs) -> Result<()> {
    let fs = RealFileSystem;
    let reports = convert_all(&fs, &args.inputs, args.dry_run)?;

    if args.dry_run {
        print_conversion_dry_run(&reports);
    }

    let edges: usize = reports.iter().map(|r| r.edges).sum();
    info!(files = reports.len(), edges, "conversion complete");
    Ok(())
}

/// High-level entry point used by the `stage` binary.
///
/// The current working directory is consulted here, and only when no
/// `--root` was given; everything below works on the explicit root.
pub fn run_stage(args: StageArgs) -> Result<()> {
    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("resolving current directory")?,
    };
    let cfg = load_for_root(&root, args.config.as_deref())?;
    debug!(root = ?root, ?cfg, "resolved staging layout");

    let fs = RealFileSystem;

    if args.dry_run {
        let plan = stage::plan(&fs, &root, &cfg)?;
        print_stage_dry_run(&root, &cfg, &plan);
        return Ok(());
    }

    let report = stage::stage(&fs, &root, &cfg)?;
    info!(
        code_files = report.code.files_copied,
        data_files = report.data.files_copied.len(),
        "staging complete"
    );
    Ok(())
}

/// Dry-run output for `convert`: one line per input.
fn print_conversion_dry_run(reports: &[ConversionReport]) {
    println!("convert dry-run");
    for report in reports {
        println!(
            "  {} -> {} ({} records, {} edges{})",
            report.input.display(),
            report.output.display(),
            report.records,
            report.edges,
            if report.overwrote_input {
                ", replaces input"
            } else {
                ""
            }
        );
    }
}

/// Dry-run output for `stage`: layout, then every file that would be staged.
fn print_stage_dry_run(root: &Path, cfg: &StageConfig, plan: &StagePlan) {
    println!("stage dry-run");
    println!("  root = {}", root.display());
    println!();

    println!(
        "code: {} -> {}{}",
        plan.code_source.display(),
        plan.code_destination.display(),
        replaces_suffix(plan.replaces_code)
    );
    println!("  entry point excluded: {}", cfg.code.entry_point.display());
    println!("  files ({}):", plan.code_files.len());
    for file in &plan.code_files {
        println!("    - {file}");
    }
    println!();

    println!(
        "data: {} -> {}{}",
        plan.data_source.display(),
        plan.data_destination.display(),
        replaces_suffix(plan.replaces_data)
    );
    println!("  pattern: {}", cfg.data.pattern);
    println!("  files ({}):", plan.data_files.len());
    for file in &plan.data_files {
        println!("    - {}", display_name(file).display());
    }

    debug!("dry-run complete (nothing staged)");
}

fn replaces_suffix(replaces: bool) -> &'static str {
    if replaces { " (replaces existing)" } else { "" }
}

fn display_name(path: &Path) -> PathBuf {
    path.file_name().map(PathBuf::from).unwrap_or_else(|| path.to_path_buf())
}
