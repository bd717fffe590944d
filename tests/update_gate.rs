// tests/update_gate.rs

mod common;
use crate::common::init_tracing;

use std::error::Error;

use toolbelt::exec::ExecResult;
use toolbelt::platform::Platform;
use toolbelt::store::mock::MemoryStore;
use toolbelt::store::{JsonFileStore, StoreDb};
use toolbelt::update::{GateOutcome, UpdateGate};
use toolbelt_test_utils::fake_runner::FakeRunner;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn first_check_of_the_day_queries_once_then_short_circuits() -> TestResult {
    init_tracing();

    let store = MemoryStore::new();
    // Default fake response: success with empty output, i.e. up to date.
    let runner = FakeRunner::new();
    let gate = UpdateGate::new(&store, &runner, "@local/toolbelt");

    assert_eq!(gate.check().await?, GateOutcome::UpToDate);
    let commands = runner.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].contains("npm outdated -g @local/toolbelt"));
    assert!(store.snapshot().last_update_check_date.is_some());

    // A second call on the same calendar day must not query again.
    assert_eq!(gate.check().await?, GateOutcome::AlreadyCheckedToday);
    assert_eq!(runner.commands().len(), 1);
    Ok(())
}

#[tokio::test]
async fn past_check_date_counts_as_unchecked() -> TestResult {
    init_tracing();

    let store = MemoryStore::with_db(StoreDb {
        last_update_check_date: Some("2001-01-01".to_string()),
    });
    let runner = FakeRunner::new();
    let gate = UpdateGate::new(&store, &runner, "@local/toolbelt");

    assert_eq!(gate.check().await?, GateOutcome::UpToDate);
    assert_eq!(runner.commands().len(), 1);

    let stored = store
        .snapshot()
        .last_update_check_date
        .expect("date persisted");
    assert_ne!(stored, "2001-01-01");
    Ok(())
}

#[tokio::test]
async fn non_empty_outdated_output_means_update_available() -> TestResult {
    init_tracing();

    let store = MemoryStore::new();
    // `npm outdated` exits non-zero and prints a table when behind.
    let runner = FakeRunner::with_handler(|_req| ExecResult {
        completed: false,
        output: "Package      Current  Wanted  Latest\ntoolbelt     1.0.0    1.1.0   1.1.0\n"
            .to_string(),
        exit_code: Some(1),
    });
    let gate = UpdateGate::new(&store, &runner, "@local/toolbelt");

    assert_eq!(gate.check().await?, GateOutcome::UpdateAvailable);
    assert!(store.snapshot().last_update_check_date.is_some());
    Ok(())
}

#[tokio::test]
async fn failed_query_does_not_count_as_checked() -> TestResult {
    init_tracing();

    let store = MemoryStore::new();
    // No exit code at all: the query never started.
    let runner = FakeRunner::with_handler(|_req| ExecResult {
        completed: false,
        output: "npm: command not found".to_string(),
        exit_code: None,
    });
    let gate = UpdateGate::new(&store, &runner, "@local/toolbelt");

    assert_eq!(gate.check().await?, GateOutcome::QueryFailed);
    assert!(store.snapshot().last_update_check_date.is_none());

    // The next call queries again instead of short-circuiting.
    gate.check().await?;
    assert_eq!(runner.commands().len(), 2);
    Ok(())
}

#[tokio::test]
async fn corrupt_store_does_not_block_the_command() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all")?;
    let store = JsonFileStore::new(path);

    let runner = FakeRunner::new();
    let platform = Platform::detect();
    // The middleware warns and moves on instead of failing the invocation.
    toolbelt::update_if_needed(&platform, &runner, &store).await?;

    // The gate never got far enough to query.
    assert!(runner.commands().is_empty());
    Ok(())
}

#[tokio::test]
async fn unparseable_stored_date_is_treated_as_never_checked() -> TestResult {
    init_tracing();

    let store = MemoryStore::with_db(StoreDb {
        last_update_check_date: Some("not a date".to_string()),
    });
    let runner = FakeRunner::new();
    let gate = UpdateGate::new(&store, &runner, "@local/toolbelt");

    assert_eq!(gate.check().await?, GateOutcome::UpToDate);
    assert_eq!(runner.commands().len(), 1);
    Ok(())
}
