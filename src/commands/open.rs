// src/commands/open.rs

//! `open`: launch the right editor for the current folder.
//!
//! Preference order for solution files: the project table's configured
//! path, then a single `.sln` found in the current directory, then VS Code
//! on the bare folder.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::config::projects;
use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};
use crate::platform::{self, Os, Platform};

/// GUI editors never exit from the launching shell's point of view, so
/// their commands run through the timeout variant.
const EDITOR_LAUNCH_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn open(runner: &dyn CommandRunner, platform: &Platform) -> Result<()> {
    let folder_name = platform::current_folder_name()?;

    if let Some(project) = projects::find_by_folder(&folder_name)
        && let Some(sln) = project.solution_file_path
    {
        let editor = solution_file_command(runner, platform).await;
        info!("Opening {sln}...");
        launch(runner, format!("{editor}\"{sln}\"")).await;
        return Ok(());
    }

    let solution_files = solution_files_in_current_dir()?;
    match solution_files.as_slice() {
        [] => {
            info!("Opening current directory in VS Code...");
            launch(runner, "code .".to_string()).await;
        }
        [single] => {
            let editor = solution_file_command(runner, platform).await;
            info!("Opening {single}...");
            launch(runner, format!("{editor}\"{single}\"")).await;
        }
        many => {
            error!("More than one solution file was found:");
            for file in many {
                println!("- {file}");
            }
        }
    }
    Ok(())
}

async fn launch(runner: &dyn CommandRunner, cmd: String) {
    let result = runner
        .run_with_timeout(ExecRequest::new(cmd), EDITOR_LAUNCH_TIMEOUT)
        .await;
    // Timing out is the normal outcome for a GUI editor; anything captured
    // is only interesting at debug level.
    debug!(
        completed = result.completed,
        output = %result.output,
        "editor launch finished"
    );
}

fn solution_files_in_current_dir() -> Result<Vec<String>> {
    let mut found = Vec::new();
    for entry in std::fs::read_dir(".")? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.ends_with(".sln") {
            found.push(name);
        }
    }
    Ok(found)
}

/// Pick the editor command for solution files: Rider when installed, then
/// Visual Studio, then VS Code. The trailing space is part of the command.
async fn solution_file_command(runner: &dyn CommandRunner, platform: &Platform) -> &'static str {
    if command_exists(runner, platform, "rider").await {
        return "rider ";
    }

    match platform.os {
        Os::Windows => {
            if command_exists(runner, platform, "devenv").await {
                return "devenv ";
            }
        }
        Os::MacOs => {
            let probe = runner
                .run(ExecRequest::new(
                    "mdfind \"kMDItemCFBundleIdentifier == com.microsoft.visual-studio\"",
                ))
                .await;
            if !probe.output.trim().is_empty() {
                return "devenv ";
            }
        }
        _ => {}
    }

    "code "
}

async fn command_exists(runner: &dyn CommandRunner, platform: &Platform, command: &str) -> bool {
    let probe = if platform.os == Os::Windows {
        format!("get-command {command}")
    } else {
        format!("which {command}")
    };
    runner.run(ExecRequest::new(probe)).await.completed
}
