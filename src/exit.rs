// src/exit.rs

//! Mapping the outcome of the whole program onto a process exit code.
//!
//! `0` when the monitor returned normally (interrupt, `--once`,
//! `--dry-run`), `1` for an error or a panic escaping it. Both failure
//! paths are logged before the process exits.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

/// Run `f` and turn its result into an exit code, catching panics.
pub fn exit_code<F>(f: F) -> i32
where
    F: FnOnce() -> anyhow::Result<()>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => 0,
        Ok(Err(err)) => {
            error!("fatal error: {err:#}");
            eprintln!("repowatch error: {err:?}");
            1
        }
        Err(payload) => {
            let msg = panic_message(&*payload);
            error!("fatal error: panic: {msg}");
            eprintln!("repowatch error: panic: {msg}");
            1
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}
