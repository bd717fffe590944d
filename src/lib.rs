// src/lib.rs

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod platform;
pub mod store;
pub mod update;
pub mod video;

use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use crate::cli::{CliArgs, Command};
use crate::exec::{CommandRunner, ShellRunner};
use crate::platform::Platform;
use crate::store::{JsonFileStore, Store};
use crate::update::{GateOutcome, UpdateGate};
use crate::video::download::DownloadMode;

/// npm package the self-update check queries for.
const PACKAGE_NAME: &str = "@local/toolbelt";

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - platform detection (once, injected everywhere)
/// - the shell command runner
/// - the once-per-day update gate
/// - subcommand dispatch
pub async fn run(args: CliArgs) -> Result<()> {
    let platform = Platform::detect();
    let runner = ShellRunner::new(platform.clone());

    // The update gate runs before every command except the explicit
    // `update`, which skips straight to the trigger.
    if !args.skip_update_check && !matches!(args.command, Command::Update) {
        match JsonFileStore::default_location() {
            Ok(store) => update_if_needed(&platform, &runner, &store).await?,
            Err(err) => warn!(error = %err, "no store available; skipping update check"),
        }
    }

    match args.command {
        Command::Test { args } => {
            println!("You entered the following args: {args:?}");
        }
        Command::Update => {
            info!("Forcing update...");
            update::trigger_update(&platform, &runner).await?;
        }
        Command::Fpull => commands::fpull::fpull(&runner).await?,
        Command::Setup => commands::setup::setup(&runner, &platform).await?,
        Command::Open => commands::open::open(&runner, &platform).await?,
        Command::Startup => update::trigger_update(&platform, &runner).await?,
        Command::Scaffold {
            project_type,
            name,
            list,
        } => commands::scaffold::scaffold(project_type.as_deref(), name.as_deref(), list)?,
        Command::Clean { target } => {
            commands::clean::clean(&runner, &platform, target.as_deref()).await?
        }
        Command::DownloadVideos { sequential } => {
            let mode = if sequential {
                DownloadMode::Sequential
            } else {
                DownloadMode::Parallel
            };
            commands::videos::download_videos(mode).await?;
        }
        Command::MergeVideos { folder } => {
            commands::videos::merge_videos_in(&runner, Path::new(&folder)).await?
        }
        Command::DownloadAndMergeVideos => {
            commands::videos::download_and_merge_videos(&runner).await?
        }
        Command::MergeAllVideos => commands::videos::merge_all_videos(&runner).await?,
        Command::Pkg { action } => commands::pkg::pkg(&runner, action.as_deref()).await?,
        Command::Sub { package_prefix } => {
            commands::subscribe::sub(&runner, package_prefix.as_deref()).await?
        }
        Command::Unsub { package_prefix } => {
            commands::subscribe::unsub(&runner, package_prefix.as_deref()).await?
        }
        Command::Dev { package_prefix } => {
            commands::subscribe::dev(&runner, package_prefix.as_deref()).await?
        }
    }

    Ok(())
}

/// Once-per-day update middleware. A broken or unreadable store downgrades
/// to a warning so the actual command still runs.
pub async fn update_if_needed(
    platform: &Platform,
    runner: &dyn CommandRunner,
    store: &dyn Store,
) -> Result<()> {
    let gate = UpdateGate::new(store, runner, PACKAGE_NAME);
    match gate.check().await {
        Ok(GateOutcome::UpdateAvailable) => {
            info!("Update is needed. Installing update now...");
            update::trigger_update(platform, runner).await?;
        }
        Ok(GateOutcome::AlreadyCheckedToday)
        | Ok(GateOutcome::UpToDate)
        | Ok(GateOutcome::QueryFailed) => {}
        Err(err) => warn!(error = %err, "update check failed; continuing without it"),
    }
    Ok(())
}
