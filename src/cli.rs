// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `repowatch`.
///
/// Every flag is optional; with none, the built-in repository table is
/// polled every 30 seconds and logs go to `/var/log/git_monitor.log`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "repowatch",
    version,
    about = "Poll git checkouts, pull upstream changes, run update commands and restart services.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a TOML registry file.
    ///
    /// If omitted, the built-in table is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seconds to sleep between passes (overrides `[settings].interval_secs`).
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Append-only log file (overrides `[settings].log_file`).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `REPOWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Run a single pass over all repositories, then exit.
    #[arg(long)]
    pub once: bool,

    /// Load the registry, print what would run, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
