pub mod builders;
pub mod fake_runner;
pub mod log_capture;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

pub use fake_runner::{FakeRunner, RecordedCommand};
pub use log_capture::LogCapture;

use repowatch::git::GitCommands;

/// The status probe command line the checker issues.
pub fn status_command() -> &'static str {
    GitCommands::default().status()
}

/// `git status -uno` text for a checkout that is behind its upstream.
pub const STATUS_BEHIND: &str = "On branch main\n\
Your branch is behind 'origin/main' by 1 commit, and can be fast-forwarded.\n  \
(use \"git pull\" to update your local branch)\n\n\
nothing to commit (use -u to show untracked files)\n";

/// `git status -uno` text for a checkout that is current.
pub const STATUS_UP_TO_DATE: &str = "On branch main\n\
Your branch is up to date with 'origin/main'.\n\n\
nothing to commit (use -u to show untracked files)\n";

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Run a future with a 5-second timeout.
#[allow(dead_code)]
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
