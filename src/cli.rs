// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Every flag is optional: running `dlt-launcher` with no arguments launches
//! the built-in region list.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dlt-launcher`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "dlt-launcher",
    version,
    about = "Start a distributed load test across the regions where the Fargate stack is deployed.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a TOML file with `[[region]]` entries.
    ///
    /// If omitted, the built-in region list is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DLT_LAUNCHER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate the region list and print the launch plan without calling AWS.
    #[arg(long)]
    pub dry_run: bool,
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

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
