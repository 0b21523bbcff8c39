// src/cloud/mod.rs

//! Access to the two AWS services a launch talks to.
//!
//! - [`backend`] defines the `CloudBackend` trait the orchestrator is written
//!   against, so tests can swap in a fake.
//! - [`aws`] is the production implementation on top of the AWS SDK
//!   (CloudFormation `DescribeStacks`, ECS `RunTask`).

pub mod aws;
pub mod backend;

pub use aws::{AwsCloudBackend, schedule_result_from, stack_outputs_from};
pub use backend::{BackendFuture, CloudBackend};
