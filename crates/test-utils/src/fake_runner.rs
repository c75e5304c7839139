use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tokio::time::Instant;

use repowatch::errors::{RepowatchError, Result};
use repowatch::exec::{CommandOutcome, CommandRunner};

/// One command the fake was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    pub command: String,
    pub cwd: Option<PathBuf>,
    pub at: Instant,
}

#[derive(Debug, Clone)]
enum Scripted {
    Outcome(CommandOutcome),
    SpawnError(String),
}

/// A fake runner that:
/// - records every command line (and its working directory) in order
/// - replays scripted outcomes per exact command line
/// - succeeds with empty output for anything not scripted.
///
/// Scripts queued with `push_*` are consumed once each; `set_*` scripts
/// apply to every invocation. Clones share state, so a test can keep one
/// handle while the monitor owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    executed: Arc<Mutex<Vec<RecordedCommand>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<Scripted>>>>,
    sticky: Arc<Mutex<HashMap<String, Scripted>>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every run of `command` returns `outcome`.
    pub fn set_outcome(&self, command: &str, outcome: CommandOutcome) -> &Self {
        self.sticky
            .lock()
            .unwrap()
            .insert(command.to_string(), Scripted::Outcome(outcome));
        self
    }

    /// The next run of `command` returns `outcome`.
    pub fn push_outcome(&self, command: &str, outcome: CommandOutcome) -> &Self {
        self.queued
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_default()
            .push_back(Scripted::Outcome(outcome));
        self
    }

    /// Every run of `command` fails to spawn.
    pub fn set_spawn_error(&self, command: &str, message: &str) -> &Self {
        self.sticky
            .lock()
            .unwrap()
            .insert(command.to_string(), Scripted::SpawnError(message.to_string()));
        self
    }

    pub fn executed(&self) -> Vec<RecordedCommand> {
        self.executed.lock().unwrap().clone()
    }

    /// Just the command lines, in execution order.
    pub fn commands(&self) -> Vec<String> {
        self.executed().into_iter().map(|c| c.command).collect()
    }

    fn next_script(&self, command: &str) -> Option<Scripted> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(command) {
            if let Some(s) = queue.pop_front() {
                return Some(s);
            }
        }
        self.sticky.lock().unwrap().get(command).cloned()
    }
}

impl CommandRunner for FakeRunner {
    fn run<'a>(
        &'a self,
        command: &'a str,
        cwd: Option<&'a Path>,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutcome>> + Send + 'a>> {
        self.executed.lock().unwrap().push(RecordedCommand {
            command: command.to_string(),
            cwd: cwd.map(Path::to_path_buf),
            at: Instant::now(),
        });

        let script = self.next_script(command);

        Box::pin(async move {
            // Yield like a real process wait would.
            tokio::task::yield_now().await;

            match script {
                Some(Scripted::Outcome(o)) => Ok(o),
                Some(Scripted::SpawnError(msg)) => Err(RepowatchError::IoError(io::Error::new(
                    io::ErrorKind::NotFound,
                    msg,
                ))),
                None => Ok(CommandOutcome::success("")),
            }
        })
    }
}
