// src/config/model.rs

use serde::Deserialize;

/// Regions the load test is launched in, in processing order.
///
/// ```toml
/// [[region]]
/// name = "us-east-1"
/// stack_name = "dlt-fargate"
/// task_count = 3
///
/// [[region]]
/// name = "eu-west-1"
/// stack_name = "dlt-fargate"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LaunchConfig {
    #[serde(default)]
    pub region: Vec<RegionConfig>,
}

/// `[[region]]` entry. Unknown keys (e.g. a misspelled `stackName`) are
/// rejected rather than falling back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    /// AWS region code, e.g. `us-east-2`.
    pub name: String,

    /// Name of the CloudFormation stack deployed in that region.
    #[serde(default = "default_stack_name")]
    pub stack_name: String,

    /// Number of tasks to start in that region.
    #[serde(default = "default_task_count")]
    pub task_count: u32,
}

pub const DEFAULT_STACK_NAME: &str = "dlt-fargate";
pub const DEFAULT_TASK_COUNT: u32 = 3;

/// Regions where the stack is deployed when no config file is given.
pub const BUILTIN_REGIONS: [&str; 3] = ["us-east-1", "us-east-2", "us-west-2"];

fn default_stack_name() -> String {
    DEFAULT_STACK_NAME.to_string()
}

fn default_task_count() -> u32 {
    DEFAULT_TASK_COUNT
}

impl RegionConfig {
    pub fn new(name: impl Into<String>, stack_name: impl Into<String>, task_count: u32) -> Self {
        Self {
            name: name.into(),
            stack_name: stack_name.into(),
            task_count,
        }
    }
}

impl LaunchConfig {
    pub fn builtin() -> Self {
        Self {
            region: BUILTIN_REGIONS
                .iter()
                .map(|name| RegionConfig::new(*name, DEFAULT_STACK_NAME, DEFAULT_TASK_COUNT))
                .collect(),
        }
    }

    /// Total tasks requested across every region.
    pub fn total_tasks(&self) -> u64 {
        self.region.iter().map(|r| u64::from(r.task_count)).sum()
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
