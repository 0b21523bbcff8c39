// src/cloud/aws.rs

use std::collections::HashMap;

use aws_config::BehaviorVersion;
use aws_sdk_cloudformation as cloudformation;
use aws_sdk_ecs as ecs;
use aws_sdk_ecs::types::{
    AssignPublicIp, AwsVpcConfiguration, LaunchType as EcsLaunchType, NetworkConfiguration,
};
use aws_types::region::Region;
use tracing::{debug, warn};

use crate::cloud::backend::{BackendFuture, CloudBackend};
use crate::errors::LaunchError;
use crate::types::{
    LaunchType, ScheduledTask, StackOutputs, TaskFailure, TaskLaunchRequest, TaskScheduleResult,
};

const DESCRIBE_STACKS: &str = "DescribeStacks";
const RUN_TASK: &str = "RunTask";

/// SDK clients bound to one region. Cloning only bumps reference counts.
#[derive(Clone)]
struct RegionClients {
    cloudformation: cloudformation::Client,
    ecs: ecs::Client,
}

/// Production backend.
///
/// Credentials come from the default AWS provider chain. Clients are built
/// the first time a region is used and reused afterwards.
#[derive(Default)]
pub struct AwsCloudBackend {
    clients: HashMap<String, RegionClients>,
}

impl AwsCloudBackend {
    pub fn new() -> Self {
        Self::default()
    }

    async fn clients_for(&mut self, region: &str) -> RegionClients {
        if let Some(clients) = self.clients.get(region) {
            return clients.clone();
        }

        debug!(region, "loading AWS config");
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        let clients = RegionClients {
            cloudformation: cloudformation::Client::new(&sdk_config),
            ecs: ecs::Client::new(&sdk_config),
        };
        self.clients.insert(region.to_string(), clients.clone());
        clients
    }
}

impl CloudBackend for AwsCloudBackend {
    fn describe_stack<'a>(
        &'a mut self,
        region: &'a str,
        stack_name: &'a str,
    ) -> BackendFuture<'a, Vec<StackOutputs>> {
        Box::pin(async move {
            let clients = self.clients_for(region).await;

            let response = clients
                .cloudformation
                .describe_stacks()
                .stack_name(stack_name)
                .send()
                .await
                .map_err(|err| LaunchError::Service {
                    operation: DESCRIBE_STACKS,
                    region: region.to_string(),
                    message: cloudformation::error::DisplayErrorContext(&err).to_string(),
                })?;

            let stacks = response
                .stacks()
                .iter()
                .map(|stack| stack_outputs_from(stack.outputs()))
                .collect();

            Ok(stacks)
        })
    }

    fn run_tasks<'a>(
        &'a mut self,
        region: &'a str,
        request: TaskLaunchRequest,
    ) -> BackendFuture<'a, Option<TaskScheduleResult>> {
        Box::pin(async move {
            let clients = self.clients_for(region).await;
            let service_error = |message: String| LaunchError::Service {
                operation: RUN_TASK,
                region: region.to_string(),
                message,
            };

            let count = i32::try_from(request.count)
                .map_err(|_| service_error(format!("task count {} out of range", request.count)))?;

            let assign_public_ip = if request.network.assign_public_ip {
                AssignPublicIp::Enabled
            } else {
                AssignPublicIp::Disabled
            };

            let vpc = AwsVpcConfiguration::builder()
                .set_subnets(Some(request.network.subnets.clone()))
                .set_security_groups(Some(request.network.security_groups.clone()))
                .assign_public_ip(assign_public_ip)
                .build()
                .map_err(|err| service_error(err.to_string()))?;

            let launch_type = match request.launch_type {
                LaunchType::Fargate => EcsLaunchType::Fargate,
            };

            let output = clients
                .ecs
                .run_task()
                .cluster(&request.cluster)
                .task_definition(&request.task_definition)
                .count(count)
                .started_by(&request.started_by)
                .group(&request.group)
                .launch_type(launch_type)
                .network_configuration(
                    NetworkConfiguration::builder()
                        .awsvpc_configuration(vpc)
                        .build(),
                )
                .send()
                .await
                .map_err(|err| service_error(ecs::error::DisplayErrorContext(&err).to_string()))?;

            Ok(schedule_result_from(output))
        })
    }
}

/// Collect a stack's outputs. Entries lacking a key or a value are dropped.
pub fn stack_outputs_from(outputs: &[cloudformation::types::Output]) -> StackOutputs {
    StackOutputs::from_pairs(outputs.iter().filter_map(|output| {
        match (output.output_key(), output.output_value()) {
            (Some(key), Some(value)) => Some((key, value)),
            _ => None,
        }
    }))
}

/// Map a RunTask response. `None` when the response carries neither a task
/// list nor a failure list; tasks without an ARN are skipped.
pub fn schedule_result_from(
    output: ecs::operation::run_task::RunTaskOutput,
) -> Option<TaskScheduleResult> {
    if output.tasks.is_none() && output.failures.is_none() {
        return None;
    }

    let tasks = output
        .tasks()
        .iter()
        .filter_map(|task| match task.task_arn() {
            Some(arn) => Some(ScheduledTask {
                task_arn: arn.to_string(),
            }),
            None => {
                warn!("RunTask returned a task without an ARN; skipping it");
                None
            }
        })
        .collect();

    let failures = output
        .failures()
        .iter()
        .map(|failure| TaskFailure {
            arn: failure.arn().map(str::to_string),
            reason: failure.reason().map(str::to_string),
            detail: failure.detail().map(str::to_string),
        })
        .collect();

    Some(TaskScheduleResult { tasks, failures })
}
