#![allow(dead_code)]

use std::path::PathBuf;

use repowatch::config::{ConfigFile, RawConfigFile, RepoConfig, SettingsSection};
use repowatch::registry::{Registry, RegistryEntry};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                settings: SettingsSection::default(),
                repo: Vec::new(),
            },
        }
    }

    pub fn with_repo(mut self, repo: RepoConfig) -> Self {
        self.config.repo.push(repo);
        self
    }

    pub fn interval_secs(mut self, secs: u64) -> Self {
        self.config.settings.interval_secs = secs;
        self
    }

    pub fn remote_branch(mut self, remote: &str, branch: &str) -> Self {
        self.config.settings.remote = remote.to_string();
        self.config.settings.branch = branch.to_string();
        self
    }

    pub fn restart_command(mut self, cmd: &str) -> Self {
        self.config.settings.restart_command = cmd.to_string();
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `RegistryEntry`.
pub struct EntryBuilder {
    directory: PathBuf,
    update_command: String,
    services: Vec<String>,
}

impl EntryBuilder {
    pub fn new(directory: &str) -> Self {
        Self {
            directory: PathBuf::from(directory),
            update_command: "npm install".to_string(),
            services: vec![],
        }
    }

    pub fn update_command(mut self, cmd: &str) -> Self {
        self.update_command = cmd.to_string();
        self
    }

    pub fn service(mut self, name: &str) -> Self {
        self.services.push(name.to_string());
        self
    }

    pub fn build(self) -> RegistryEntry {
        RegistryEntry::new(self.directory, self.update_command, self.services)
    }
}

/// Registry from a list of entries, in the given order.
pub fn registry(entries: Vec<RegistryEntry>) -> Registry {
    Registry::new(entries)
}
