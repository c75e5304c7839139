// src/exec/command.rs

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::errors::Result;
use crate::exec::backend::{CommandOutcome, CommandRunner};

/// Runs commands through the platform shell using `tokio::process`.
///
/// Output is buffered in full; nothing is streamed. The child is killed if
/// the future is dropped (e.g. on Ctrl-C while a pull is in flight).
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(
        &'a self,
        command: &'a str,
        cwd: Option<&'a Path>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        Box::pin(async move {
            // Build a shell command appropriate for the platform.
            let mut cmd = if cfg!(windows) {
                let mut c = Command::new("cmd");
                c.arg("/C").arg(command);
                c
            } else {
                let mut c = Command::new("sh");
                c.arg("-c").arg(command);
                c
            };

            if let Some(dir) = cwd {
                cmd.current_dir(dir);
            }

            cmd.stdin(Stdio::null())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            debug!(cmd = %command, cwd = ?cwd, "spawning process");

            let output = cmd.output().await?;

            let exit_code = output.status.code().unwrap_or(-1);
            debug!(cmd = %command, exit_code, "process exited");

            Ok(CommandOutcome {
                exit_code,
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        })
    }
}
