// src/registry.rs

//! The fixed set of watched directories.
//!
//! A [`Registry`] is built once at startup from a validated [`ConfigFile`]
//! and never mutated afterwards; the monitor only borrows it.

use std::path::{Path, PathBuf};

use crate::config::ConfigFile;

/// One watched checkout: where it lives, how to update it after a pull, and
/// which services to restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    directory: PathBuf,
    update_command: String,
    services: Vec<String>,
}

impl RegistryEntry {
    pub fn new(
        directory: impl Into<PathBuf>,
        update_command: impl Into<String>,
        services: Vec<String>,
    ) -> Self {
        Self {
            directory: directory.into(),
            update_command: update_command.into(),
            services,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn update_command(&self) -> &str {
        &self.update_command
    }

    pub fn services(&self) -> &[String] {
        &self.services
    }
}

/// Ordered, immutable list of entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }

    pub fn from_config(cfg: &ConfigFile) -> Self {
        let entries = cfg
            .repo
            .iter()
            .map(|r| RegistryEntry::new(&r.directory, &r.update_command, r.services.clone()))
            .collect();
        Self { entries }
    }

    /// Entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_keeps_table_order() {
        let registry = Registry::from_config(&ConfigFile::builtin());
        let dirs: Vec<_> = registry.iter().map(|e| e.directory().to_path_buf()).collect();

        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/var/www/conversa-o"),
                PathBuf::from("/var/www/leo"),
                PathBuf::from("/var/www/COG"),
            ]
        );

        let first = registry.iter().next().unwrap();
        assert_eq!(first.update_command(), "pip install -r requirements.txt");
        assert_eq!(first.services(), ["conversa-o.service", "nginx"]);
    }
}
