// src/lib.rs

pub mod cli;
pub mod cloud;
pub mod config;
pub mod errors;
pub mod launch;
pub mod logging;
pub mod types;

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::cloud::AwsCloudBackend;
use crate::config::{LaunchConfig, resolve_config};
use crate::launch::{LaunchOutcome, start_distributed_load_test};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - region list resolution (built-in or `--config`)
/// - dry-run output
/// - the AWS backend and the launch itself
///
/// A launch that stops on a missing stack or a scheduling failure still
/// returns `Ok(())`; only unrecoverable errors come back as `Err`.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.dry_run {
        print_dry_run(&cfg, &mut out)?;
        return Ok(());
    }

    let mut backend = AwsCloudBackend::new();
    let outcome = start_distributed_load_test(&cfg, &mut backend, &mut out).await?;

    match &outcome {
        LaunchOutcome::Completed { run_id, .. } => {
            info!(%run_id, tasks = outcome.tasks_started(), "launch finished");
        }
        LaunchOutcome::Aborted { run_id, reason, .. } => {
            info!(%run_id, tasks = outcome.tasks_started(), %reason, "launch stopped early");
        }
    }

    Ok(())
}

/// Simple dry-run output: print regions, stacks and task counts.
pub fn print_dry_run<W: Write>(cfg: &LaunchConfig, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "dlt-launcher dry-run")?;
    writeln!(out)?;

    writeln!(out, "regions ({}):", cfg.region.len())?;
    for region in &cfg.region {
        writeln!(out, "  - {}", region.name)?;
        writeln!(out, "      stack: {}", region.stack_name)?;
        writeln!(out, "      task_count: {}", region.task_count)?;
    }
    writeln!(out)?;
    writeln!(out, "total tasks: {}", cfg.total_tasks())?;

    debug!("dry-run complete (no AWS calls)");
    Ok(())
}
