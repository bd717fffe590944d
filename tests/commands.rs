// tests/commands.rs

//! Command handler dispatch tests against the fake runner.

mod common;
use crate::common::init_tracing;

use std::sync::{Arc, Mutex};

use toolbelt::commands::{clean, fpull, pkg, subscribe};
use toolbelt::exec::{ExecRequest, ExecResult};
use toolbelt::platform::{Os, Platform, Shell, Terminal};
use toolbelt_test_utils::fake_runner::FakeRunner;

fn linux_platform() -> Platform {
    Platform {
        os: Os::Linux,
        shell: Shell::Sh,
        terminal: Terminal::Unknown,
        home_dir: None,
    }
}

#[tokio::test]
async fn fpull_fetches_then_pulls() {
    init_tracing();

    let requests: Arc<Mutex<Vec<ExecRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    let runner = FakeRunner::with_handler(move |req| {
        seen.lock().unwrap().push(req.clone());
        ExecResult {
            completed: true,
            output: String::new(),
            exit_code: Some(0),
        }
    });

    fpull::fpull(&runner).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].command_line, "git fetch -a");
    // Fetch tolerates stderr chatter; pull does not.
    assert!(!requests[0].fail_on_stderr);
    assert_eq!(requests[1].command_line, "git pull");
    assert!(requests[1].fail_on_stderr);
}

#[tokio::test]
async fn clean_branches_uses_the_unix_form_on_linux() {
    init_tracing();

    let runner = FakeRunner::new();
    clean::clean(&runner, &linux_platform(), Some("branches"))
        .await
        .unwrap();

    let commands = runner.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].starts_with("git branch | grep"));
}

#[tokio::test]
async fn clean_with_unknown_target_runs_nothing() {
    init_tracing();

    let runner = FakeRunner::new();
    clean::clean(&runner, &linux_platform(), Some("caches"))
        .await
        .unwrap();
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn pkg_without_action_runs_nothing() {
    init_tracing();

    let runner = FakeRunner::new();
    pkg::pkg(&runner, None).await.unwrap();
    assert!(runner.commands().is_empty());
}

#[tokio::test]
async fn dev_with_a_prefix_runs_in_that_projects_package_dir() {
    init_tracing();

    let requests: Arc<Mutex<Vec<ExecRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let seen = requests.clone();
    let runner = FakeRunner::with_handler(move |req| {
        seen.lock().unwrap().push(req.clone());
        ExecResult {
            completed: true,
            output: String::new(),
            exit_code: Some(0),
        }
    });

    subscribe::dev(&runner, Some("cc")).await.unwrap();

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].command_line.starts_with("nodemon"));
    // The watch runs from the selected project's package directory, not
    // from wherever the command was invoked.
    let dir = requests[0].working_dir.as_ref().unwrap();
    assert!(dir.ends_with("packages/core"));
}

#[tokio::test]
async fn pkg_validate_runs_a_dry_run_publish() {
    init_tracing();

    let runner = FakeRunner::new();
    pkg::pkg(&runner, Some("validateJsr")).await.unwrap();

    let commands = runner.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains("jsr publish"));
    assert!(commands[0].contains("--dry-run"));
}
