// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [settings]
/// interval_secs = 30
/// log_file = "/var/log/git_monitor.log"
///
/// [[repo]]
/// directory = "/var/www/leo"
/// update_command = "npm install"
/// services = ["leo.service", "nginx"]
/// ```
///
/// `[[repo]]` is an array of tables so the file order is the order in which
/// repositories are checked on every pass.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub settings: SettingsSection,

    #[serde(default)]
    pub repo: Vec<RepoConfig>,
}

/// A configuration that passed validation.
///
/// Only constructible through `TryFrom<RawConfigFile>` (see `validate.rs`)
/// or [`ConfigFile::builtin`].
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub settings: SettingsSection,
    pub repo: Vec<RepoConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(settings: SettingsSection, repo: Vec<RepoConfig>) -> Self {
        Self { settings, repo }
    }

    /// The table used when no `--config` is given.
    pub fn builtin() -> Self {
        let repo = vec![
            RepoConfig::new(
                "/var/www/conversa-o",
                "pip install -r requirements.txt",
                &["conversa-o.service", "nginx"],
            ),
            RepoConfig::new("/var/www/leo", "npm install", &["leo.service", "nginx"]),
            RepoConfig::new("/var/www/COG", "npm install", &["COG.service", "nginx"]),
        ];
        Self::new_unchecked(SettingsSection::default(), repo)
    }
}

/// `[settings]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SettingsSection {
    /// Seconds to sleep after each full pass.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Append-only log destination.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Prefix of the per-service restart command; the service name is
    /// appended as the last argument.
    #[serde(default = "default_restart_command")]
    pub restart_command: String,
}

impl SettingsSection {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

fn default_interval_secs() -> u64 {
    30
}

/// Log destination when neither the config nor `--log-file` names one.
pub const DEFAULT_LOG_FILE: &str = "/var/log/git_monitor.log";

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_restart_command() -> String {
    "sudo systemctl restart".to_string()
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            log_file: default_log_file(),
            remote: default_remote(),
            branch: default_branch(),
            restart_command: default_restart_command(),
        }
    }
}

/// `[[repo]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoConfig {
    /// Working directory of the checkout.
    pub directory: PathBuf,

    /// Run in `directory` after a successful pull (e.g. `npm install`).
    pub update_command: String,

    /// Services restarted, in order, after the update command succeeds.
    #[serde(default)]
    pub services: Vec<String>,
}

impl RepoConfig {
    pub fn new(directory: impl Into<PathBuf>, update_command: &str, services: &[&str]) -> Self {
        Self {
            directory: directory.into(),
            update_command: update_command.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
        }
    }
}
