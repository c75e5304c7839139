// src/git.rs

//! Git command lines and change detection.
//!
//! Git itself is treated as an opaque command. The only thing we interpret
//! is the text of `git status -uno`, and that rule lives entirely in
//! [`has_upstream_changes`].

use crate::config::SettingsSection;

/// Phrase `git status` prints when the local branch lacks remote commits.
pub const BEHIND_MARKER: &str = "Your branch is behind";

/// Builds the fetch / status / pull command lines for one remote branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommands {
    remote: String,
    branch: String,
}

impl GitCommands {
    pub fn new(remote: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    pub fn from_settings(settings: &SettingsSection) -> Self {
        Self::new(&settings.remote, &settings.branch)
    }

    pub fn fetch(&self) -> String {
        format!("git fetch {} {}", self.remote, self.branch)
    }

    /// Status without untracked files; only its text is inspected.
    ///
    /// Pinned to the C locale so [`BEHIND_MARKER`] is not translated.
    pub fn status(&self) -> &'static str {
        if cfg!(windows) {
            "git status -uno"
        } else {
            "LC_ALL=C git status -uno"
        }
    }

    pub fn pull(&self) -> String {
        format!("git pull {} {}", self.remote, self.branch)
    }
}

impl Default for GitCommands {
    fn default() -> Self {
        Self::new("origin", "main")
    }
}

/// Whether `git status` output says the local branch is behind upstream.
pub fn has_upstream_changes(status_text: &str) -> bool {
    status_text.contains(BEHIND_MARKER)
}
