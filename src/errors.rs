// src/errors.rs

//! Crate-wide error type and `Result` alias.
//!
//! Only the unrecoverable paths live here. A missing stack or a rejected
//! RunTask call is reported through [`crate::launch::AbortReason`] instead,
//! because those end the launch cleanly with a zero exit status.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("stack '{stack}' in region {region} has no output named '{key}'")]
    MissingOutput {
        key: String,
        stack: String,
        region: String,
    },

    #[error("{operation} failed in region {region}: {message}")]
    Service {
        operation: &'static str,
        region: String,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LaunchError>;
