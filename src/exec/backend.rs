// src/exec/backend.rs

//! Pluggable command runner abstraction.
//!
//! The checker and service restarter talk to a `CommandRunner` instead of
//! spawning processes directly. Production code uses
//! [`ShellRunner`](super::command::ShellRunner); tests provide a fake that
//! records every command line and replays scripted outcomes.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::errors::Result;

/// Exit code and fully buffered output of one finished command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutcome {
    /// `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Trait abstracting how shell commands are executed.
///
/// `Err` means the process could not be spawned or waited on; a process
/// that ran and failed is an `Ok` outcome with a non-zero exit code.
pub trait CommandRunner: Send + Sync {
    fn run<'a>(
        &'a self,
        command: &'a str,
        cwd: Option<&'a Path>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>>;
}
