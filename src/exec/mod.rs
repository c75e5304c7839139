// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `CommandRunner` trait and `CommandOutcome`.
//! - [`command`] is the production `ShellRunner`, built on
//!   `tokio::process::Command`.
//! - [`step`] wraps a runner with the success/failure logging and the
//!   structured `CommandError` used by the checker.

pub mod backend;
pub mod command;
pub mod step;

pub use backend::{CommandOutcome, CommandRunner};
pub use command::ShellRunner;
pub use step::{run_captured, run_step};
