// src/launch/mod.rs

//! The launch sequence itself.
//!
//! - [`orchestrator`] walks the region list and drives the backend.
//! - [`request`] turns a stack's outputs into a RunTask request.
//! - [`report`] holds what a launch returns to the caller.

pub mod orchestrator;
pub mod report;
pub mod request;

pub use orchestrator::{launch_with_run_id, start_distributed_load_test};
pub use report::{AbortReason, LaunchOutcome, RegionLaunch};
pub use request::build_launch_request;
