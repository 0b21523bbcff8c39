// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::LaunchConfig;
use crate::errors::{LaunchError, Result};

/// Upper bound ECS RunTask accepts for `count` in a single call.
pub const MAX_TASKS_PER_CALL: u32 = 10;

/// Run semantic validation against a region list.
///
/// This checks:
/// - there is at least one region
/// - region and stack names are non-empty
/// - `1 <= task_count <= MAX_TASKS_PER_CALL`
/// - no (region, stack) pair appears twice
pub fn validate_config(cfg: &LaunchConfig) -> Result<()> {
    if cfg.region.is_empty() {
        return Err(LaunchError::Config(
            "config must contain at least one [[region]] entry".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (idx, region) in cfg.region.iter().enumerate() {
        if region.name.trim().is_empty() {
            return Err(LaunchError::Config(format!(
                "region #{idx} has an empty name"
            )));
        }
        if region.stack_name.trim().is_empty() {
            return Err(LaunchError::Config(format!(
                "region '{}' has an empty stack_name",
                region.name
            )));
        }
        if region.task_count == 0 || region.task_count > MAX_TASKS_PER_CALL {
            return Err(LaunchError::Config(format!(
                "region '{}': task_count must be between 1 and {MAX_TASKS_PER_CALL} (got {})",
                region.name, region.task_count
            )));
        }
        if !seen.insert((region.name.as_str(), region.stack_name.as_str())) {
            return Err(LaunchError::Config(format!(
                "stack '{}' in region '{}' is listed more than once",
                region.stack_name, region.name
            )));
        }
    }

    Ok(())
}
