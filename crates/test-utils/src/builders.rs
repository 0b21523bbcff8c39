#![allow(dead_code)]

use dlt_launcher::config::{LaunchConfig, RegionConfig};
use dlt_launcher::config::model::{DEFAULT_STACK_NAME, DEFAULT_TASK_COUNT};
use dlt_launcher::types::{
    OUTPUT_CLUSTER, OUTPUT_SECURITY_GROUP, OUTPUT_SUBNETS, OUTPUT_TASK_DEFINITION, StackOutputs,
};

/// Builder for `LaunchConfig` to simplify test setup.
///
/// Starts with no regions; use `LaunchConfig::builtin()` for the default list.
pub struct LaunchConfigBuilder {
    config: LaunchConfig,
}

impl LaunchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: LaunchConfig { region: Vec::new() },
        }
    }

    pub fn with_region(mut self, region: RegionConfig) -> Self {
        self.config.region.push(region);
        self
    }

    /// Add a region with the default stack name and task count.
    pub fn with_default_region(self, name: &str) -> Self {
        self.with_region(RegionConfigBuilder::new(name).build())
    }

    pub fn build(self) -> LaunchConfig {
        self.config
    }
}

impl Default for LaunchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RegionConfig`.
pub struct RegionConfigBuilder {
    region: RegionConfig,
}

impl RegionConfigBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            region: RegionConfig::new(name, DEFAULT_STACK_NAME, DEFAULT_TASK_COUNT),
        }
    }

    pub fn stack_name(mut self, stack: &str) -> Self {
        self.region.stack_name = stack.to_string();
        self
    }

    pub fn task_count(mut self, count: u32) -> Self {
        self.region.task_count = count;
        self
    }

    pub fn build(self) -> RegionConfig {
        self.region
    }
}

/// Stack outputs whose identifiers all embed `region`, so a request built
/// from them can be traced back to the region it came from.
pub fn stack_outputs_for(region: &str) -> StackOutputs {
    let mut outputs = StackOutputs::new();
    outputs.insert(OUTPUT_CLUSTER, format!("dlt-cluster-{region}"));
    outputs.insert(
        OUTPUT_TASK_DEFINITION,
        format!("arn:aws:ecs:{region}:123456789012:task-definition/dlt:1"),
    );
    outputs.insert(OUTPUT_SECURITY_GROUP, format!("sg-{region}"));
    for (idx, key) in OUTPUT_SUBNETS.iter().enumerate() {
        outputs.insert(*key, format!("subnet-{region}-{idx}"));
    }
    outputs
}
