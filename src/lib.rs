// src/lib.rs

pub mod checker;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod exit;
pub mod fs;
pub mod git;
pub mod logging;
pub mod monitor;
pub mod registry;
pub mod services;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::exec::ShellRunner;
use crate::fs::RealFileSystem;
use crate::git::GitCommands;
use crate::monitor::{Monitor, MonitorOptions};
use crate::registry::Registry;

/// Resolve the configuration for this process: the `--config` file or the
/// built-in table, with CLI overrides applied.
pub fn load_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut cfg = config::load_or_builtin(args.config.as_deref())
        .with_context(|| match &args.config {
            Some(p) => format!("loading config from {:?}", p),
            None => "loading built-in config".to_string(),
        })?;

    if let Some(secs) = args.interval {
        cfg.settings.interval_secs = secs;
    }
    if let Some(ref path) = args.log_file {
        cfg.settings.log_file = path.clone();
    }

    Ok(cfg)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the registry
/// - the shell runner and real filesystem
/// - the monitor loop
/// - Ctrl-C handling
pub async fn run(args: CliArgs, cfg: ConfigFile) -> Result<()> {
    let registry = Registry::from_config(&cfg);

    if args.dry_run {
        // A closed stdout only loses the listing; it is not a fatal error.
        if let Err(err) = print_dry_run(&mut io::stdout().lock(), &cfg, &registry) {
            warn!(error = %err, "could not write dry-run output");
        }
        return Ok(());
    }

    info!("starting repository monitor");

    let options = MonitorOptions {
        interval: cfg.settings.interval(),
        once: args.once,
    };
    let monitor = Monitor::new(
        registry,
        &cfg.settings,
        ShellRunner::new(),
        RealFileSystem,
        options,
    );

    // Ctrl-C → graceful shutdown. Dropping the monitor future also kills
    // any command still in flight.
    tokio::select! {
        res = monitor.run() => res?,
        sig = tokio::signal::ctrl_c() => {
            sig.context("listening for Ctrl+C")?;
            info!("monitoring interrupted by user");
        }
    }

    Ok(())
}

/// Simple dry-run output: settings, then per repo the commands that a
/// changed checkout would run.
pub fn print_dry_run(out: &mut impl Write, cfg: &ConfigFile, registry: &Registry) -> io::Result<()> {
    let git = GitCommands::from_settings(&cfg.settings);

    writeln!(out, "repowatch dry-run")?;
    writeln!(out, "  settings.interval_secs = {}", cfg.settings.interval_secs)?;
    writeln!(out, "  settings.log_file = {}", cfg.settings.log_file.display())?;
    writeln!(out)?;

    writeln!(out, "repos ({}):", registry.len())?;
    for entry in registry.iter() {
        writeln!(out, "  - {}", entry.directory().display())?;
        writeln!(out, "      fetch:  {}", git.fetch())?;
        writeln!(out, "      status: {}", git.status())?;
        writeln!(out, "      pull:   {}", git.pull())?;
        writeln!(out, "      update: {}", entry.update_command())?;
        for service in entry.services() {
            writeln!(
                out,
                "      restart: {} {}",
                cfg.settings.restart_command, service
            )?;
        }
    }
    out.flush()
}
