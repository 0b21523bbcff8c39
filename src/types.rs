// src/types.rs

use std::collections::BTreeMap;
use std::fmt;

use uuid::Uuid;

use crate::errors::{LaunchError, Result};

/// Stack output holding the ECS cluster name.
pub const OUTPUT_CLUSTER: &str = "FargateClusterName";
/// Stack output holding the task definition ARN.
pub const OUTPUT_TASK_DEFINITION: &str = "TaskDefinitionArn";
/// Stack output holding the security group attached to every task.
pub const OUTPUT_SECURITY_GROUP: &str = "TaskSecurityGroup";
/// Stack outputs holding the three subnets, in launch order.
pub const OUTPUT_SUBNETS: [&str; 3] = ["SubnetA", "SubnetB", "SubnetC"];

/// Identifier shared by every task started in one invocation.
///
/// Used verbatim as both `startedBy` and `group` on the RunTask call, so the
/// tasks of one load test can be found again across regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(Uuid);

impl RunId {
    pub fn generate() -> Self {
        RunId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Output key/value pairs of one deployed CloudFormation stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackOutputs {
    values: BTreeMap<String, String>,
}

impl StackOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(OutputKey, OutputValue)` pairs. A repeated key keeps the
    /// last value seen.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Look up an output the launch cannot do without.
    ///
    /// `stack` and `region` only feed the error message.
    pub fn require(&self, key: &str, stack: &str, region: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| LaunchError::MissingOutput {
            key: key.to_string(),
            stack: stack.to_string(),
            region: region.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// ECS launch type. Only the serverless mode is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchType {
    #[default]
    Fargate,
}

/// `awsvpcConfiguration` for the scheduled tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub assign_public_ip: bool,
    pub security_groups: Vec<String>,
    pub subnets: Vec<String>,
}

/// Everything one RunTask call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLaunchRequest {
    pub cluster: String,
    pub task_definition: String,
    pub count: u32,
    pub started_by: String,
    pub group: String,
    pub launch_type: LaunchType,
    pub network: NetworkConfig,
}

/// A task ECS accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub task_arn: String,
}

/// A failure entry from a RunTask response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskFailure {
    pub arn: Option<String>,
    pub reason: Option<String>,
    pub detail: Option<String>,
}

impl fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn={} reason={} detail={}",
            self.arn.as_deref().unwrap_or("-"),
            self.reason.as_deref().unwrap_or("-"),
            self.detail.as_deref().unwrap_or("-"),
        )
    }
}

/// Result of one RunTask call: accepted tasks and failures.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskScheduleResult {
    pub tasks: Vec<ScheduledTask>,
    pub failures: Vec<TaskFailure>,
}

impl TaskScheduleResult {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
