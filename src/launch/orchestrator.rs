// src/launch/orchestrator.rs

use std::io::Write;

use tracing::{debug, info, warn};

use crate::cloud::CloudBackend;
use crate::config::{LaunchConfig, RegionConfig};
use crate::errors::Result;
use crate::launch::report::{AbortReason, LaunchOutcome, RegionLaunch};
use crate::launch::request::build_launch_request;
use crate::types::RunId;

/// Start one distributed load test.
///
/// Generates a fresh [`RunId`] and hands off to [`launch_with_run_id`].
pub async fn start_distributed_load_test<B, W>(
    config: &LaunchConfig,
    backend: &mut B,
    out: &mut W,
) -> Result<LaunchOutcome>
where
    B: CloudBackend + ?Sized,
    W: Write,
{
    launch_with_run_id(RunId::generate(), config, backend, out).await
}

/// Walk the regions in order and schedule their tasks, tagging every RunTask
/// call with `run_id`.
///
/// The first region whose stack is missing, or whose RunTask call reports
/// failures or comes back empty, ends the launch: the diagnostic is written to
/// `out` and `LaunchOutcome::Aborted` is returned without touching any later
/// region. Service errors and missing stack outputs are returned as `Err`.
pub async fn launch_with_run_id<B, W>(
    run_id: RunId,
    config: &LaunchConfig,
    backend: &mut B,
    out: &mut W,
) -> Result<LaunchOutcome>
where
    B: CloudBackend + ?Sized,
    W: Write,
{
    writeln!(out, "Started new load test with runId = {run_id}")?;
    info!(%run_id, regions = config.region.len(), "starting load test");

    let mut launched = Vec::with_capacity(config.region.len());

    for region in &config.region {
        match launch_region(&run_id, region, backend, out).await? {
            Ok(region_launch) => launched.push(region_launch),
            Err(reason) => {
                warn!(%run_id, region = %reason.region(), %reason, "load test aborted");
                return Ok(LaunchOutcome::Aborted {
                    run_id,
                    regions: launched,
                    reason,
                });
            }
        }
    }

    info!(%run_id, regions = launched.len(), "load test launched in every region");
    Ok(LaunchOutcome::Completed {
        run_id,
        regions: launched,
    })
}

/// Launch a single region.
///
/// The outer `Result` carries unrecoverable errors, the inner one the
/// handled abort paths.
async fn launch_region<B, W>(
    run_id: &RunId,
    region: &RegionConfig,
    backend: &mut B,
    out: &mut W,
) -> Result<std::result::Result<RegionLaunch, AbortReason>>
where
    B: CloudBackend + ?Sized,
    W: Write,
{
    writeln!(
        out,
        "Describing CloudFormation stack {} in region {}",
        region.stack_name, region.name
    )?;
    debug!(region = %region.name, stack = %region.stack_name, "describing stack");

    let stacks = backend
        .describe_stack(&region.name, &region.stack_name)
        .await?;

    let Some(outputs) = stacks.into_iter().next() else {
        writeln!(
            out,
            "CloudFormation stack {} not found in region {}",
            region.stack_name, region.name
        )?;
        return Ok(Err(AbortReason::StackNotFound {
            region: region.name.clone(),
            stack: region.stack_name.clone(),
        }));
    };

    writeln!(out, "Extracting cluster values from CloudFormation stack")?;
    debug!(region = %region.name, outputs = outputs.len(), "stack outputs read");
    let request = build_launch_request(region, &outputs, run_id)?;

    writeln!(out, "Scheduling tasks in region {}", region.name)?;
    info!(
        region = %region.name,
        cluster = %request.cluster,
        count = request.count,
        "scheduling tasks"
    );

    let Some(result) = backend.run_tasks(&region.name, request).await? else {
        writeln!(out, "Failed to schedule tasks in region {}", region.name)?;
        writeln!(out, "  RunTask returned no response")?;
        return Ok(Err(AbortReason::EmptyResponse {
            region: region.name.clone(),
        }));
    };

    if result.has_failures() {
        writeln!(out, "Failed to schedule tasks in region {}", region.name)?;
        for failure in &result.failures {
            writeln!(out, "  failure: {failure}")?;
        }
        let started_task_arns: Vec<String> =
            result.tasks.into_iter().map(|task| task.task_arn).collect();
        for arn in &started_task_arns {
            writeln!(out, "  started despite failure: {arn}")?;
        }
        if !started_task_arns.is_empty() {
            warn!(
                region = %region.name,
                started = started_task_arns.len(),
                "RunTask partially succeeded; started tasks are left running"
            );
        }
        return Ok(Err(AbortReason::SchedulingFailed {
            region: region.name.clone(),
            failures: result.failures,
            started_task_arns,
        }));
    }

    let mut task_arns = Vec::with_capacity(result.tasks.len());
    for task in result.tasks {
        writeln!(out, "Task scheduled {}", task.task_arn)?;
        task_arns.push(task.task_arn);
    }
    info!(region = %region.name, tasks = task_arns.len(), "tasks scheduled");

    Ok(Ok(RegionLaunch {
        region: region.name.clone(),
        task_arns,
    }))
}
