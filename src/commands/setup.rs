// src/commands/setup.rs

//! `setup`: run the setup commands configured for the current folder.

use tracing::{debug, error, info};

use crate::config::projects;
use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};
use crate::platform::{self, Platform, Terminal};

pub async fn setup(runner: &dyn CommandRunner, platform: &Platform) -> Result<()> {
    let folder_name = platform::current_folder_name()?;

    let Some(project) = projects::find_by_folder(&folder_name) else {
        error!(
            "There are no settings for the folder \"{folder_name}\". \
             Add them to the project table first."
        );
        return Ok(());
    };
    if project.setup_commands.is_empty() {
        error!("The project \"{folder_name}\" has no setup commands configured.");
        return Ok(());
    }

    // In Windows Terminal every setup command gets its own tab; elsewhere
    // they run one after another in this shell.
    if platform.terminal == Terminal::WindowsTerminal {
        for cmd in project.setup_commands {
            info!(cmd, "opening setup command in a new tab");
            let tab = format!("wt -w 0 nt -d . pwsh -NoExit -Command \"{cmd}\"");
            let result = runner.run(ExecRequest::new(tab)).await;
            debug!(completed = result.completed, "tab launch finished");
        }
        return Ok(());
    }

    for cmd in project.setup_commands {
        info!(cmd, "running setup command");
        let result = runner.run(ExecRequest::new(*cmd).verbose(true)).await;
        if !result.completed {
            error!("Setup command \"{cmd}\" failed:\n{}", result.output);
            return Ok(());
        }
    }
    Ok(())
}
