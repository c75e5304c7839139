// src/config/mod.rs

//! Configuration loading and validation for repowatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model and the built-in table (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, load_or_builtin};
pub use model::{ConfigFile, RawConfigFile, RepoConfig, SettingsSection};
