// src/errors.rs

//! Crate-wide error types.
//!
//! - [`RepowatchError`] covers startup concerns (config, IO, TOML) and
//!   process spawning.
//! - [`CommandError`] is the structured outcome of a failed command step;
//!   the checker derives both its log lines and its control flow from it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepowatchError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Why a single external command did not succeed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The process could not be spawned or waited on.
    #[error("exception running command `{command}`: {message}")]
    Spawn { command: String, message: String },

    /// The process ran but exited with a non-zero code.
    #[error("command `{command}` exited with code {exit_code}")]
    NonZeroExit {
        command: String,
        exit_code: i32,
        stderr: String,
    },
}

impl CommandError {
    pub fn command(&self) -> &str {
        match self {
            CommandError::Spawn { command, .. } => command,
            CommandError::NonZeroExit { command, .. } => command,
        }
    }
}

pub type Result<T> = std::result::Result<T, RepowatchError>;
