// src/exec/step.rs

//! Logging wrappers around a [`CommandRunner`].
//!
//! Every checked step produces exactly one log line on success and, on a
//! non-zero exit, a second line carrying the captured stderr. Failures are
//! returned as [`CommandError`] values; nothing here panics or propagates a
//! spawn error as-is.

use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::errors::{CommandError, Result};
use crate::exec::backend::{CommandOutcome, CommandRunner};

/// Run `command` and require a zero exit code.
pub async fn run_step(
    runner: &dyn CommandRunner,
    command: &str,
    cwd: Option<&Path>,
) -> std::result::Result<CommandOutcome, CommandError> {
    match runner.run(command, cwd).await {
        Ok(outcome) if outcome.is_success() => {
            info!("command succeeded: {command}");
            Ok(outcome)
        }
        Ok(outcome) => {
            error!("command failed: {command}");
            error!("stderr: {}", outcome.stderr.trim_end());
            Err(CommandError::NonZeroExit {
                command: command.to_string(),
                exit_code: outcome.exit_code,
                stderr: outcome.stderr,
            })
        }
        Err(err) => {
            error!("exception running command {command}: {err}");
            Err(CommandError::Spawn {
                command: command.to_string(),
                message: err.to_string(),
            })
        }
    }
}

/// Run `command` and hand back whatever it printed, regardless of exit code.
///
/// A spawn failure is logged and reported as an empty outcome with exit
/// code `-1`, so callers inspecting stdout simply see no text.
pub async fn run_captured(
    runner: &dyn CommandRunner,
    command: &str,
    cwd: Option<&Path>,
) -> CommandOutcome {
    let result: Result<CommandOutcome> = runner.run(command, cwd).await;
    match result {
        Ok(outcome) => {
            debug!(
                cmd = %command,
                exit_code = outcome.exit_code,
                "captured command output"
            );
            outcome
        }
        Err(err) => {
            warn!("could not run {command}: {err}");
            CommandOutcome {
                exit_code: -1,
                ..CommandOutcome::default()
            }
        }
    }
}
