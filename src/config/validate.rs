// src/config/validate.rs

use std::collections::HashSet;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{RepowatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = RepowatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.settings, raw.repo))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_repos(cfg)?;
    validate_settings(cfg)?;
    validate_repos(cfg)?;
    Ok(())
}

fn ensure_has_repos(cfg: &RawConfigFile) -> Result<()> {
    if cfg.repo.is_empty() {
        return Err(RepowatchError::ConfigError(
            "config must contain at least one [[repo]] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_settings(cfg: &RawConfigFile) -> Result<()> {
    let s = &cfg.settings;

    if s.interval_secs == 0 {
        return Err(RepowatchError::ConfigError(
            "[settings].interval_secs must be >= 1 (got 0)".to_string(),
        ));
    }

    for (field, value) in [
        ("remote", &s.remote),
        ("branch", &s.branch),
        ("restart_command", &s.restart_command),
    ] {
        if value.trim().is_empty() {
            return Err(RepowatchError::ConfigError(format!(
                "[settings].{field} must not be empty"
            )));
        }
    }

    Ok(())
}

fn validate_repos(cfg: &RawConfigFile) -> Result<()> {
    let mut seen = HashSet::new();

    for (idx, repo) in cfg.repo.iter().enumerate() {
        if repo.directory.as_os_str().is_empty() {
            return Err(RepowatchError::ConfigError(format!(
                "repo #{idx} has an empty `directory`"
            )));
        }
        if repo.update_command.trim().is_empty() {
            return Err(RepowatchError::ConfigError(format!(
                "repo {:?} has an empty `update_command`",
                repo.directory
            )));
        }
        if !seen.insert(&repo.directory) {
            return Err(RepowatchError::ConfigError(format!(
                "repo {:?} is listed more than once",
                repo.directory
            )));
        }
    }

    Ok(())
}
