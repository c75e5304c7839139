// src/monitor.rs

//! The polling loop.
//!
//! One pass checks every registry entry in order, each check awaited before
//! the next starts. After the pass the loop sleeps for the configured
//! interval, however long the pass itself took, and starts over.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info};

use crate::checker::{CheckResult, RepositoryChecker};
use crate::config::SettingsSection;
use crate::errors::Result;
use crate::exec::CommandRunner;
use crate::fs::FileSystem;
use crate::git::GitCommands;
use crate::registry::Registry;

#[derive(Debug, Clone, Copy)]
pub struct MonitorOptions {
    /// Sleep between the end of one pass and the start of the next.
    pub interval: Duration,
    /// Stop after the first pass instead of looping (used for `--once`).
    pub once: bool,
}

impl Default for MonitorOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            once: false,
        }
    }
}

/// Outcome of one pass, in registry order.
pub type PassReport = Vec<(PathBuf, CheckResult)>;

pub struct Monitor<R: CommandRunner, F: FileSystem> {
    registry: Registry,
    runner: R,
    fs: F,
    git: GitCommands,
    restart_command: String,
    options: MonitorOptions,
}

impl<R: CommandRunner, F: FileSystem> fmt::Debug for Monitor<R, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("registry", &self.registry)
            .field("git", &self.git)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<R: CommandRunner, F: FileSystem> Monitor<R, F> {
    pub fn new(
        registry: Registry,
        settings: &SettingsSection,
        runner: R,
        fs: F,
        options: MonitorOptions,
    ) -> Self {
        Self {
            registry,
            runner,
            fs,
            git: GitCommands::from_settings(settings),
            restart_command: settings.restart_command.clone(),
            options,
        }
    }

    /// Main loop. Only returns when `once` is set.
    pub async fn run(&self) -> Result<()> {
        info!(
            repos = self.registry.len(),
            interval_secs = self.options.interval.as_secs_f64(),
            "monitor loop started"
        );

        loop {
            self.run_pass().await;

            if self.options.once {
                info!("single pass complete; exiting");
                return Ok(());
            }

            tokio::time::sleep(self.options.interval).await;
        }
    }

    /// Check every entry once, sequentially, in registry order.
    pub async fn run_pass(&self) -> PassReport {
        let checker = RepositoryChecker::new(
            &self.runner,
            &self.fs,
            self.git.clone(),
            &self.restart_command,
        );

        let mut report = Vec::with_capacity(self.registry.len());
        for entry in self.registry.iter() {
            let result = checker.check(entry).await;
            report.push((entry.directory().to_path_buf(), result));
        }

        let updated = report
            .iter()
            .filter(|(_, r)| matches!(r, CheckResult::Updated))
            .count();
        let failed = report.iter().filter(|(_, r)| !r.is_success()).count();
        debug!(
            checked = report.len(),
            updated, failed, "pass complete"
        );

        report
    }
}
