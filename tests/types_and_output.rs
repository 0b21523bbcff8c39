// tests/types_and_output.rs

use std::path::Path;

use clap::Parser;

use dlt_launcher::cli::{CliArgs, LogLevel};
use dlt_launcher::config::LaunchConfig;
use dlt_launcher::errors::LaunchError;
use dlt_launcher::logging::{level_from_log_level, parse_level_str};
use dlt_launcher::print_dry_run;
use dlt_launcher::types::{RunId, StackOutputs, TaskFailure, TaskScheduleResult};

#[test]
fn run_id_is_a_hyphenated_v4_uuid() {
    let run_id = RunId::generate();
    let text = run_id.to_string();

    assert_eq!(text.len(), 36);
    assert_eq!(text.matches('-').count(), 4);
    assert_eq!(text, text.to_lowercase());
    assert_eq!(run_id.as_uuid().get_version_num(), 4);
}

#[test]
fn later_duplicate_output_keys_win() {
    let outputs = StackOutputs::from_pairs([
        ("SubnetA", "subnet-old"),
        ("SubnetB", "subnet-b"),
        ("SubnetA", "subnet-new"),
    ]);

    assert_eq!(outputs.len(), 2);
    assert_eq!(outputs.get("SubnetA"), Some("subnet-new"));
}

#[test]
fn require_reports_key_stack_and_region() {
    let outputs = StackOutputs::new();

    match outputs.require("TaskDefinitionArn", "dlt-fargate", "us-west-2") {
        Err(err @ LaunchError::MissingOutput { .. }) => {
            let msg = err.to_string();
            assert!(msg.contains("TaskDefinitionArn"));
            assert!(msg.contains("dlt-fargate"));
            assert!(msg.contains("us-west-2"));
        }
        other => panic!("expected MissingOutput, got {other:?}"),
    }
}

#[test]
fn failure_display_fills_gaps_with_dashes() {
    let failure = TaskFailure {
        arn: Some("arn:aws:ecs:us-east-1:1:container-instance/x".to_string()),
        reason: Some("RESOURCE:CPU".to_string()),
        detail: None,
    };

    assert_eq!(
        failure.to_string(),
        "arn=arn:aws:ecs:us-east-1:1:container-instance/x reason=RESOURCE:CPU detail=-"
    );
    assert!(
        TaskScheduleResult {
            tasks: vec![],
            failures: vec![failure]
        }
        .has_failures()
    );
    assert!(!TaskScheduleResult::default().has_failures());
}

#[test]
fn dry_run_lists_every_region() {
    let mut out: Vec<u8> = Vec::new();
    print_dry_run(&LaunchConfig::builtin(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("regions (3):"));
    for region in ["us-east-1", "us-east-2", "us-west-2"] {
        assert!(text.contains(&format!("  - {region}")));
    }
    assert!(text.contains("total tasks: 9"));
}

#[test]
fn log_levels_parse_from_flag_and_env_strings() {
    assert_eq!(parse_level_str(" Warning "), Some(tracing::Level::WARN));
    assert_eq!(parse_level_str("TRACE"), Some(tracing::Level::TRACE));
    assert_eq!(parse_level_str("loud"), None);
    assert_eq!(level_from_log_level(LogLevel::Debug), tracing::Level::DEBUG);
}

#[test]
fn config_flag_parses_to_a_path() {
    let args = CliArgs::try_parse_from(["dlt-launcher", "--config", "demos/regions.toml"]).unwrap();
    assert_eq!(args.config.as_deref(), Some(Path::new("demos/regions.toml")));
    assert!(!args.dry_run);

    let bare = CliArgs::try_parse_from(["dlt-launcher"]).unwrap();
    assert!(bare.config.is_none());
    assert!(bare.log_level.is_none());
}
