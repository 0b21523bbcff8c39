// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::LaunchConfig;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Load a region list from a given path.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: LaunchConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a region list from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<LaunchConfig> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Pick the region list for this invocation: the file at `path` if one was
/// given, otherwise the built-in list. Both are validated.
pub fn resolve_config(path: Option<&Path>) -> Result<LaunchConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading region list from file");
            load_and_validate(path)
        }
        None => {
            let config = LaunchConfig::builtin();
            validate_config(&config)?;
            Ok(config)
        }
    }
}
