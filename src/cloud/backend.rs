// src/cloud/backend.rs

//! Pluggable cloud backend abstraction.
//!
//! The orchestrator never touches an SDK client directly. It asks a
//! `CloudBackend` to describe a stack and to run tasks, which keeps the
//! launch sequence testable without network access.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;
use crate::types::{StackOutputs, TaskLaunchRequest, TaskScheduleResult};

/// Boxed future returned by backend calls.
pub type BackendFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Trait abstracting the infrastructure-description and task-scheduling
/// services.
///
/// Production code uses [`super::AwsCloudBackend`].
pub trait CloudBackend: Send {
    /// Describe the stack named `stack_name` in `region`.
    ///
    /// Returns one entry per matching stack; an empty `Vec` means the stack
    /// is not deployed there.
    fn describe_stack<'a>(
        &'a mut self,
        region: &'a str,
        stack_name: &'a str,
    ) -> BackendFuture<'a, Vec<StackOutputs>>;

    /// Ask the scheduler in `region` to start the tasks described by `request`.
    ///
    /// `Ok(None)` means the service answered without any task or failure list.
    fn run_tasks<'a>(
        &'a mut self,
        region: &'a str,
        request: TaskLaunchRequest,
    ) -> BackendFuture<'a, Option<TaskScheduleResult>>;
}
