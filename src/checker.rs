// src/checker.rs

//! Per-repository check: fetch, decide, pull, update, restart.
//!
//! [`RepositoryChecker::check`] walks one registry entry through
//!
//! 1. directory existence
//! 2. `git fetch`
//! 3. `git status -uno` (text only, exit code ignored)
//! 4. change decision via [`has_upstream_changes`]
//! 5. on change: `git pull`, the update command, then service restarts
//!
//! and stops at the first failing step. Earlier steps are never undone.
//! Service restarts are best-effort and cannot fail a check.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::errors::CommandError;
use crate::exec::{run_captured, run_step, CommandRunner};
use crate::fs::FileSystem;
use crate::git::{has_upstream_changes, GitCommands};
use crate::registry::RegistryEntry;
use crate::services::ServiceRestarter;

/// Runner-checked steps of a check, used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Pull,
    Update,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Step::Fetch => "fetch",
            Step::Pull => "pull",
            Step::Update => "update command",
        };
        f.write_str(s)
    }
}

/// Write a console notice. Stdout may be closed or a broken pipe when the
/// monitor runs detached; that must not abort a check.
pub(crate) fn notice(out: &mut impl Write, text: &str) {
    if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
        warn!(error = %err, "could not write console notice");
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    #[error("directory {0:?} does not exist")]
    DirectoryMissing(PathBuf),

    #[error("{step} failed: {source}")]
    Command {
        step: Step,
        #[source]
        source: CommandError,
    },
}

/// Result of checking one entry during one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Upstream had nothing new.
    Unchanged,
    /// Pulled and updated; services were restarted (best-effort).
    Updated,
    Failed(CheckFailure),
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, CheckResult::Failed(_))
    }
}

pub struct RepositoryChecker<'a> {
    runner: &'a dyn CommandRunner,
    fs: &'a dyn FileSystem,
    git: GitCommands,
    restarter: ServiceRestarter<'a>,
}

impl<'a> RepositoryChecker<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        fs: &'a dyn FileSystem,
        git: GitCommands,
        restart_command: &'a str,
    ) -> Self {
        Self {
            runner,
            fs,
            git,
            restarter: ServiceRestarter::new(runner, restart_command),
        }
    }

    pub async fn check(&self, entry: &RegistryEntry) -> CheckResult {
        match self.check_inner(entry).await {
            Ok(result) => result,
            Err(failure) => CheckResult::Failed(failure),
        }
    }

    async fn check_inner(&self, entry: &RegistryEntry) -> Result<CheckResult, CheckFailure> {
        let dir = entry.directory();
        info!("checking {}...", dir.display());

        if !self.fs.exists(dir) {
            error!("directory {} does not exist", dir.display());
            return Err(CheckFailure::DirectoryMissing(dir.to_path_buf()));
        }

        self.step(Step::Fetch, &self.git.fetch(), entry).await?;

        let status = run_captured(self.runner, self.git.status(), Some(dir)).await;

        if !has_upstream_changes(&status.stdout) {
            info!("no change detected in {}", dir.display());
            notice(
                &mut io::stdout().lock(),
                &format!("No change detected in {}\n", dir.display()),
            );
            return Ok(CheckResult::Unchanged);
        }

        notice(
            &mut io::stdout().lock(),
            &format!("Change detected in {}", dir.display()),
        );
        info!("change detected in {}; updating", dir.display());

        self.step(Step::Pull, &self.git.pull(), entry).await?;
        self.step(Step::Update, entry.update_command(), entry).await?;

        self.restarter.restart_all(entry.services()).await;

        Ok(CheckResult::Updated)
    }

    async fn step(
        &self,
        step: Step,
        command: &str,
        entry: &RegistryEntry,
    ) -> Result<(), CheckFailure> {
        run_step(self.runner, command, Some(entry.directory()))
            .await
            .map(|_| ())
            .map_err(|source| CheckFailure::Command { step, source })
    }
}
