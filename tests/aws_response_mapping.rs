// tests/aws_response_mapping.rs

use aws_sdk_cloudformation::types::Output;
use aws_sdk_ecs::operation::run_task::RunTaskOutput;
use aws_sdk_ecs::types::{Failure, Task};

use dlt_launcher::cloud::{schedule_result_from, stack_outputs_from};
use dlt_launcher::types::{ScheduledTask, TaskFailure};

fn output(key: Option<&str>, value: Option<&str>) -> Output {
    Output::builder()
        .set_output_key(key.map(str::to_string))
        .set_output_value(value.map(str::to_string))
        .build()
}

#[test]
fn run_task_output_without_lists_is_no_response() {
    assert_eq!(schedule_result_from(RunTaskOutput::builder().build()), None);
}

#[test]
fn empty_task_list_is_still_a_response() {
    let result = schedule_result_from(RunTaskOutput::builder().set_tasks(Some(vec![])).build())
        .expect("response with an empty task list");

    assert!(result.tasks.is_empty());
    assert!(!result.has_failures());
}

#[test]
fn failure_list_alone_is_a_response() {
    let result = schedule_result_from(
        RunTaskOutput::builder()
            .failures(
                Failure::builder()
                    .arn("arn:aws:ecs:us-east-1:123456789012:cluster/dlt")
                    .reason("RESOURCE:MEMORY")
                    .build(),
            )
            .build(),
    )
    .expect("response with failures");

    assert!(result.tasks.is_empty());
    assert_eq!(
        result.failures,
        vec![TaskFailure {
            arn: Some("arn:aws:ecs:us-east-1:123456789012:cluster/dlt".to_string()),
            reason: Some("RESOURCE:MEMORY".to_string()),
            detail: None,
        }]
    );
}

#[test]
fn tasks_and_failures_are_carried_together() {
    let result = schedule_result_from(
        RunTaskOutput::builder()
            .tasks(Task::builder().task_arn("arn:task/1").build())
            .failures(Failure::builder().reason("AGENT").detail("capacity").build())
            .build(),
    )
    .expect("mixed response");

    assert_eq!(
        result.tasks,
        vec![ScheduledTask {
            task_arn: "arn:task/1".to_string()
        }]
    );
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].detail.as_deref(), Some("capacity"));
}

#[test]
fn tasks_without_arn_are_skipped() {
    let result = schedule_result_from(
        RunTaskOutput::builder()
            .tasks(Task::builder().task_arn("arn:task/1").build())
            .tasks(Task::builder().build())
            .tasks(Task::builder().task_arn("arn:task/2").build())
            .build(),
    )
    .expect("response with tasks");

    let arns: Vec<&str> = result.tasks.iter().map(|t| t.task_arn.as_str()).collect();
    assert_eq!(arns, vec!["arn:task/1", "arn:task/2"]);
}

#[test]
fn stack_outputs_missing_key_or_value_are_dropped() {
    let outputs = stack_outputs_from(&[
        output(Some("FargateClusterName"), Some("dlt-cluster")),
        output(Some("SubnetA"), None),
        output(None, Some("orphan-value")),
        output(Some("TaskSecurityGroup"), Some("sg-123")),
    ]);

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs.get("FargateClusterName"), Some("dlt-cluster"));
    assert_eq!(outputs.get("TaskSecurityGroup"), Some("sg-123"));
    assert_eq!(outputs.get("SubnetA"), None);
}

#[test]
fn stack_without_outputs_maps_to_empty() {
    assert!(stack_outputs_from(&[]).is_empty());
}
