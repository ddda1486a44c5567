// src/cli.rs

//! CLI argument parsing using `clap`, one `Parser` per binary.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `convert`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "convert",
    version,
    about = "Convert adjacency-list dumps into edge-list text files.",
    long_about = None
)]
pub struct ConvertArgs {
    /// Adjacency-list files to convert.
    ///
    /// Each `<name>` produces a sibling file named after `<name>` with its
    /// last four characters replaced by `.txt`.
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Parse every input and report what would be written, without writing.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PATHPREP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Command-line arguments for `stage`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stage",
    version,
    about = "Stage the code tree and graph data files for the build step.",
    long_about = None
)]
pub struct StageArgs {
    /// Project root all layout paths are relative to.
    ///
    /// Default: the current working directory.
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Staging layout file (TOML).
    ///
    /// Default: `Stage.toml` in the project root if present, otherwise the
    /// built-in layout.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print what would be staged, but don't touch the file system.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PATHPREP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `ConvertArgs::parse()`.
pub fn parse_convert() -> ConvertArgs {
    ConvertArgs::parse()
}

/// Convenience wrapper around `StageArgs::parse()`.
pub fn parse_stage() -> StageArgs {
    StageArgs::parse()
}
