use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use dlt_launcher::cloud::{BackendFuture, CloudBackend};
use dlt_launcher::errors::LaunchError;
use dlt_launcher::types::{
    ScheduledTask, StackOutputs, TaskFailure, TaskLaunchRequest, TaskScheduleResult,
};

use crate::builders::stack_outputs_for;

/// One call made against the fake backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloudCall {
    DescribeStack { region: String, stack: String },
    RunTasks { region: String, request: TaskLaunchRequest },
}

/// How `run_tasks` should answer for a region.
#[derive(Debug, Clone)]
enum ScheduleBehaviour {
    Succeed,
    Fail {
        started: u32,
        failures: Vec<TaskFailure>,
    },
    Empty,
    Error(String),
}

/// A fake backend that:
/// - serves stack outputs from memory (`stack_outputs_for(region)` unless
///   overridden, nothing for regions marked missing)
/// - answers RunTask with `count` synthetic task ARNs, failures, nothing,
///   or a service error
/// - records every call in order.
#[derive(Debug, Clone, Default)]
pub struct FakeCloudBackend {
    stacks: HashMap<(String, String), StackOutputs>,
    missing: HashSet<String>,
    behaviour: HashMap<String, ScheduleBehaviour>,
    calls: Arc<Mutex<Vec<CloudCall>>>,
}

impl FakeCloudBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `outputs` for `stack` in `region` instead of the generated ones.
    pub fn with_stack(mut self, region: &str, stack: &str, outputs: StackOutputs) -> Self {
        self.stacks
            .insert((region.to_string(), stack.to_string()), outputs);
        self
    }

    /// Pretend no stack is deployed in `region`.
    pub fn without_stack(mut self, region: &str) -> Self {
        self.missing.insert(region.to_string());
        self
    }

    /// Make RunTask in `region` report a single failure and start nothing.
    pub fn failing_in(self, region: &str, reason: &str) -> Self {
        self.partially_failing_in(region, 0, reason)
    }

    /// Make RunTask in `region` start `started` tasks and report one failure.
    pub fn partially_failing_in(mut self, region: &str, started: u32, reason: &str) -> Self {
        let failure = TaskFailure {
            arn: None,
            reason: Some(reason.to_string()),
            detail: None,
        };
        self.behaviour.insert(
            region.to_string(),
            ScheduleBehaviour::Fail {
                started,
                failures: vec![failure],
            },
        );
        self
    }

    /// Make RunTask in `region` return neither tasks nor failures.
    pub fn empty_response_in(mut self, region: &str) -> Self {
        self.behaviour
            .insert(region.to_string(), ScheduleBehaviour::Empty);
        self
    }

    /// Make RunTask in `region` fail with a service error.
    pub fn erroring_in(mut self, region: &str, message: &str) -> Self {
        self.behaviour
            .insert(region.to_string(), ScheduleBehaviour::Error(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<CloudCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Every RunTask request seen, with its region.
    pub fn run_requests(&self) -> Vec<(String, TaskLaunchRequest)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CloudCall::RunTasks { region, request } => Some((region, request)),
                CloudCall::DescribeStack { .. } => None,
            })
            .collect()
    }

    fn record(&self, call: CloudCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl CloudBackend for FakeCloudBackend {
    fn describe_stack<'a>(
        &'a mut self,
        region: &'a str,
        stack_name: &'a str,
    ) -> BackendFuture<'a, Vec<StackOutputs>> {
        Box::pin(async move {
            self.record(CloudCall::DescribeStack {
                region: region.to_string(),
                stack: stack_name.to_string(),
            });

            if self.missing.contains(region) {
                return Ok(Vec::new());
            }

            let outputs = self
                .stacks
                .get(&(region.to_string(), stack_name.to_string()))
                .cloned()
                .unwrap_or_else(|| stack_outputs_for(region));
            Ok(vec![outputs])
        })
    }

    fn run_tasks<'a>(
        &'a mut self,
        region: &'a str,
        request: TaskLaunchRequest,
    ) -> BackendFuture<'a, Option<TaskScheduleResult>> {
        Box::pin(async move {
            let count = request.count;
            self.record(CloudCall::RunTasks {
                region: region.to_string(),
                request,
            });

            let behaviour = self
                .behaviour
                .get(region)
                .cloned()
                .unwrap_or(ScheduleBehaviour::Succeed);

            match behaviour {
                ScheduleBehaviour::Succeed => Ok(Some(TaskScheduleResult {
                    tasks: synthetic_tasks(region, count),
                    failures: Vec::new(),
                })),
                ScheduleBehaviour::Fail { started, failures } => Ok(Some(TaskScheduleResult {
                    tasks: synthetic_tasks(region, started.min(count)),
                    failures,
                })),
                ScheduleBehaviour::Empty => Ok(None),
                ScheduleBehaviour::Error(message) => Err(LaunchError::Service {
                    operation: "RunTask",
                    region: region.to_string(),
                    message,
                }),
            }
        })
    }
}

fn synthetic_tasks(region: &str, count: u32) -> Vec<ScheduledTask> {
    (0..count)
        .map(|idx| ScheduledTask {
            task_arn: format!("arn:aws:ecs:{region}:123456789012:task/dlt/{idx}"),
        })
        .collect()
}
