// src/config/mod.rs

//! Region list configuration.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the built-in region list (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like task counts and duplicates (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, resolve_config};
pub use model::{LaunchConfig, RegionConfig};
pub use validate::{MAX_TASKS_PER_CALL, validate_config};
