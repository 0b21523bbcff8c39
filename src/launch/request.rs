// src/launch/request.rs

use crate::config::RegionConfig;
use crate::errors::Result;
use crate::types::{
    LaunchType, NetworkConfig, OUTPUT_CLUSTER, OUTPUT_SECURITY_GROUP, OUTPUT_SUBNETS,
    OUTPUT_TASK_DEFINITION, RunId, StackOutputs, TaskLaunchRequest,
};

/// Build the RunTask request for `region` from that region's stack outputs.
///
/// Every identifier comes from `outputs`, so callers must pass the outputs
/// of the same region they are about to launch in.
pub fn build_launch_request(
    region: &RegionConfig,
    outputs: &StackOutputs,
    run_id: &RunId,
) -> Result<TaskLaunchRequest> {
    let require = |key: &str| -> Result<String> {
        outputs
            .require(key, &region.stack_name, &region.name)
            .map(str::to_string)
    };

    let subnets = OUTPUT_SUBNETS
        .iter()
        .map(|key| require(*key))
        .collect::<Result<Vec<_>>>()?;

    Ok(TaskLaunchRequest {
        cluster: require(OUTPUT_CLUSTER)?,
        task_definition: require(OUTPUT_TASK_DEFINITION)?,
        count: region.task_count,
        started_by: run_id.to_string(),
        group: run_id.to_string(),
        launch_type: LaunchType::Fargate,
        network: NetworkConfig {
            assign_public_ip: true,
            security_groups: vec![require(OUTPUT_SECURITY_GROUP)?],
            subnets,
        },
    })
}
