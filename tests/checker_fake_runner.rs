// tests/checker_fake_runner.rs

use std::path::{Path, PathBuf};

use repowatch::checker::{CheckFailure, CheckResult, RepositoryChecker, Step};
use repowatch::errors::CommandError;
use repowatch::exec::CommandOutcome;
use repowatch::fs::mock::MockFileSystem;
use repowatch::git::GitCommands;
use repowatch_test_utils::builders::EntryBuilder;
use repowatch_test_utils::{
    init_tracing, status_command, FakeRunner, STATUS_BEHIND, STATUS_UP_TO_DATE,
};

const RESTART: &str = "sudo systemctl restart";

fn checker<'a>(runner: &'a FakeRunner, fs: &'a MockFileSystem) -> RepositoryChecker<'a> {
    RepositoryChecker::new(runner, fs, GitCommands::default(), RESTART)
}

fn behind(runner: &FakeRunner) {
    runner.set_outcome(status_command(), CommandOutcome::success(STATUS_BEHIND));
}

#[tokio::test]
async fn missing_directory_runs_no_commands() {
    init_tracing();

    let runner = FakeRunner::new();
    let fs = MockFileSystem::new();
    let entry = EntryBuilder::new("/repo-missing").service("svc").build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(
        result,
        CheckResult::Failed(CheckFailure::DirectoryMissing(PathBuf::from(
            "/repo-missing"
        )))
    );
    assert!(!result.is_success());
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn behind_checkout_pulls_updates_and_restarts_in_order() {
    init_tracing();

    let runner = FakeRunner::new();
    behind(&runner);
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a")
        .update_command("npm install")
        .service("svc-a")
        .service("nginx")
        .build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(result, CheckResult::Updated);
    assert_eq!(
        runner.commands(),
        vec![
            "git fetch origin main",
            status_command(),
            "git pull origin main",
            "npm install",
            "sudo systemctl restart svc-a",
            "sudo systemctl restart nginx",
        ]
    );

    // Git and update commands run inside the checkout; restarts don't.
    let executed = runner.executed();
    for cmd in &executed[..4] {
        assert_eq!(cmd.cwd.as_deref(), Some(Path::new("/repo-a")));
    }
    for cmd in &executed[4..] {
        assert_eq!(cmd.cwd, None);
    }
}

#[tokio::test]
async fn up_to_date_checkout_stops_after_status() {
    init_tracing();

    let runner = FakeRunner::new();
    runner.set_outcome(status_command(), CommandOutcome::success(STATUS_UP_TO_DATE));
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a")
        .service("svc-a")
        .service("nginx")
        .build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(result, CheckResult::Unchanged);
    assert!(result.is_success());
    assert_eq!(
        runner.commands(),
        vec!["git fetch origin main", status_command()]
    );
}

#[tokio::test]
async fn unrelated_status_text_is_unchanged() {
    init_tracing();

    let runner = FakeRunner::new();
    runner.set_outcome(
        status_command(),
        CommandOutcome::success("HEAD detached at 1a2b3c4\nnothing to commit"),
    );
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a").service("svc-a").build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(result, CheckResult::Unchanged);
    assert_eq!(runner.commands().len(), 2);
}

#[tokio::test]
async fn status_exit_code_is_ignored() {
    init_tracing();

    let runner = FakeRunner::new();
    runner.set_outcome(
        status_command(),
        CommandOutcome {
            exit_code: 128,
            stdout: STATUS_BEHIND.to_string(),
            stderr: "warning".to_string(),
        },
    );
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a").build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(result, CheckResult::Updated);
}

#[tokio::test]
async fn fetch_failure_skips_everything_else() {
    init_tracing();

    let runner = FakeRunner::new();
    runner.set_outcome(
        "git fetch origin main",
        CommandOutcome::failure(128, "fatal: could not read from remote"),
    );
    behind(&runner);
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a").service("svc-a").build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(
        result,
        CheckResult::Failed(CheckFailure::Command {
            step: Step::Fetch,
            source: CommandError::NonZeroExit {
                command: "git fetch origin main".to_string(),
                exit_code: 128,
                stderr: "fatal: could not read from remote".to_string(),
            },
        })
    );
    assert_eq!(runner.commands(), vec!["git fetch origin main"]);
}

#[tokio::test]
async fn fetch_spawn_error_is_a_failure_not_a_panic() {
    init_tracing();

    let runner = FakeRunner::new();
    runner.set_spawn_error("git fetch origin main", "sh: not found");
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a").build();

    let result = checker(&runner, &fs).check(&entry).await;

    match result {
        CheckResult::Failed(CheckFailure::Command {
            step: Step::Fetch,
            source: CommandError::Spawn { command, message },
        }) => {
            assert_eq!(command, "git fetch origin main");
            assert!(message.contains("sh: not found"));
        }
        other => panic!("expected fetch spawn failure, got {other:?}"),
    }
    assert_eq!(runner.commands().len(), 1);
}

#[tokio::test]
async fn pull_failure_skips_update_and_restarts() {
    init_tracing();

    let runner = FakeRunner::new();
    behind(&runner);
    runner.set_outcome(
        "git pull origin main",
        CommandOutcome::failure(1, "error: Your local changes would be overwritten"),
    );
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a").service("svc-a").build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert!(matches!(
        result,
        CheckResult::Failed(CheckFailure::Command {
            step: Step::Pull,
            ..
        })
    ));
    assert_eq!(
        runner.commands(),
        vec![
            "git fetch origin main",
            status_command(),
            "git pull origin main"
        ]
    );
}

#[tokio::test]
async fn update_failure_skips_restarts_without_rollback() {
    init_tracing();

    let runner = FakeRunner::new();
    behind(&runner);
    runner.set_outcome(
        "pip install -r requirements.txt",
        CommandOutcome::failure(1, "No matching distribution"),
    );
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a")
        .update_command("pip install -r requirements.txt")
        .service("svc-a")
        .build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert!(matches!(
        result,
        CheckResult::Failed(CheckFailure::Command {
            step: Step::Update,
            ..
        })
    ));
    // Fetch and pull happened and nothing tried to undo them.
    assert_eq!(
        runner.commands(),
        vec![
            "git fetch origin main",
            status_command(),
            "git pull origin main",
            "pip install -r requirements.txt",
        ]
    );
}

#[tokio::test]
async fn failing_restart_does_not_stop_the_others() {
    init_tracing();

    let runner = FakeRunner::new();
    behind(&runner);
    runner.set_outcome(
        "sudo systemctl restart svc-b",
        CommandOutcome::failure(5, "Unit svc-b.service not found."),
    );
    let fs = MockFileSystem::with_dirs(["/repo-a"]);
    let entry = EntryBuilder::new("/repo-a")
        .service("svc-a")
        .service("svc-b")
        .service("svc-c")
        .build();

    let result = checker(&runner, &fs).check(&entry).await;

    assert_eq!(result, CheckResult::Updated);
    let restarts: Vec<_> = runner
        .commands()
        .into_iter()
        .filter(|c| c.starts_with(RESTART))
        .collect();
    assert_eq!(
        restarts,
        vec![
            "sudo systemctl restart svc-a",
            "sudo systemctl restart svc-b",
            "sudo systemctl restart svc-c",
        ]
    );
}

#[tokio::test]
async fn custom_remote_and_branch_are_used() {
    init_tracing();

    let runner = FakeRunner::new();
    behind(&runner);
    let fs = MockFileSystem::with_dirs(["/srv/app"]);
    let entry = EntryBuilder::new("/srv/app").update_command("make").build();

    let checker = RepositoryChecker::new(
        &runner,
        &fs,
        GitCommands::new("upstream", "release"),
        "systemctl restart",
    );
    let result = checker.check(&entry).await;

    assert_eq!(result, CheckResult::Updated);
    assert_eq!(
        runner.commands(),
        vec![
            "git fetch upstream release",
            status_command(),
            "git pull upstream release",
            "make",
        ]
    );
}
