// src/launch/report.rs

use std::fmt;

use crate::types::{RunId, TaskFailure};

/// Tasks started in one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLaunch {
    pub region: String,
    pub task_arns: Vec<String>,
}

/// Why a launch stopped before reaching the last region.
///
/// These are the handled paths: the launch ends, but the process still
/// exits with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    StackNotFound { region: String, stack: String },
    /// RunTask reported failures. `started_task_arns` lists tasks the same
    /// call did start; they keep running.
    SchedulingFailed {
        region: String,
        failures: Vec<TaskFailure>,
        started_task_arns: Vec<String>,
    },
    EmptyResponse { region: String },
}

impl AbortReason {
    pub fn region(&self) -> &str {
        match self {
            AbortReason::StackNotFound { region, .. }
            | AbortReason::SchedulingFailed { region, .. }
            | AbortReason::EmptyResponse { region } => region,
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::StackNotFound { region, stack } => {
                write!(f, "stack {stack} not found in region {region}")
            }
            AbortReason::SchedulingFailed {
                region,
                failures,
                started_task_arns,
            } => write!(
                f,
                "{} scheduling failure(s) in region {region} ({} task(s) started)",
                failures.len(),
                started_task_arns.len()
            ),
            AbortReason::EmptyResponse { region } => {
                write!(f, "empty RunTask response in region {region}")
            }
        }
    }
}

/// What a call to `start_distributed_load_test` ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Every region was processed.
    Completed {
        run_id: RunId,
        regions: Vec<RegionLaunch>,
    },
    /// Processing stopped at the region named in `reason`. `regions` holds
    /// the regions that were launched before it.
    Aborted {
        run_id: RunId,
        regions: Vec<RegionLaunch>,
        reason: AbortReason,
    },
}

impl LaunchOutcome {
    pub fn run_id(&self) -> &RunId {
        match self {
            LaunchOutcome::Completed { run_id, .. } | LaunchOutcome::Aborted { run_id, .. } => {
                run_id
            }
        }
    }

    pub fn regions(&self) -> &[RegionLaunch] {
        match self {
            LaunchOutcome::Completed { regions, .. } | LaunchOutcome::Aborted { regions, .. } => {
                regions
            }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, LaunchOutcome::Completed { .. })
    }

    pub fn abort_reason(&self) -> Option<&AbortReason> {
        match self {
            LaunchOutcome::Aborted { reason, .. } => Some(reason),
            LaunchOutcome::Completed { .. } => None,
        }
    }

    /// Number of tasks started across all launched regions.
    pub fn tasks_started(&self) -> usize {
        self.regions().iter().map(|r| r.task_arns.len()).sum()
    }
}
