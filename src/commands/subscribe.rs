// src/commands/subscribe.rs

//! Local package registry commands: `sub`, `unsub` and the `dev` watch
//! mode.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::{packages, projects};
use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};
use crate::platform;

pub async fn sub(runner: &dyn CommandRunner, prefix: Option<&str>) -> Result<()> {
    run_registry_action(runner, prefix, "subscribe").await
}

pub async fn unsub(runner: &dyn CommandRunner, prefix: Option<&str>) -> Result<()> {
    run_registry_action(runner, prefix, "unsubscribe").await
}

async fn run_registry_action(
    runner: &dyn CommandRunner,
    prefix: Option<&str>,
    action: &str,
) -> Result<()> {
    let Some(prefix) = prefix else {
        error!("No package prefix was specified. Available packages:");
        print_available();
        return Ok(());
    };
    let Some(package) = packages::resolve(prefix) else {
        error!(
            "The package prefix \"{prefix}\" does not match any available packages. \
             Available packages:"
        );
        print_available();
        return Ok(());
    };

    let working_dir = working_dir_for_current_project()?;
    info!("Running {action} for package \"{package}\"...");

    let request = ExecRequest::new(format!("local-npm {action} {package}"))
        .working_dir(&working_dir)
        .verbose(true);
    let result = runner.run(request).await;
    if result.completed {
        info!("Successfully ran {action} for {package}");
    } else {
        error!("Failed to {action} {package}:\n{}", result.output);
    }
    Ok(())
}

/// Watch mode: republish the package on every file change until
/// interrupted.
pub async fn dev(runner: &dyn CommandRunner, prefix: Option<&str>) -> Result<()> {
    let folder_name = platform::current_folder_name()?;

    let project = match prefix {
        None => {
            let Some(project) = projects::find_by_folder(&folder_name) else {
                error!(
                    "Could not detect a project for the current directory \"{folder_name}\". \
                     Specify a package prefix. Available packages:"
                );
                print_available();
                return Ok(());
            };
            if project.watcher_args.is_empty() {
                error!(
                    "The project \"{folder_name}\" has no watcher arguments configured \
                     for development mode."
                );
                return Ok(());
            }
            info!("Auto-detected project: {}", project.folder_name);
            project
        }
        Some(prefix) => {
            if packages::resolve(prefix).is_none() {
                error!(
                    "The package prefix \"{prefix}\" does not match any available packages. \
                     Available packages:"
                );
                print_available();
                return Ok(());
            }
            let Some(project) = projects::PROJECTS.iter().find(|p| !p.watcher_args.is_empty())
            else {
                error!("No project is configured with watcher arguments for development mode.");
                return Ok(());
            };
            project
        }
    };

    let working_dir = working_dir_for_project(project)?;
    info!("Starting development mode in {}...", working_dir.display());
    info!("Press Ctrl+C to stop watching...");

    let args: Vec<String> = project.watcher_args.iter().map(|s| s.to_string()).collect();
    let result = runner
        .spawn_streaming("nodemon".to_string(), args, Some(working_dir))
        .await;
    if result.completed {
        info!("Development mode stopped.");
    } else {
        error!("Development mode was interrupted:\n{}", result.output);
    }
    Ok(())
}

/// If the current folder is a configured project with package.json paths,
/// the directory of the first one wins; otherwise the current directory.
fn working_dir_for_current_project() -> Result<PathBuf> {
    let folder_name = platform::current_folder_name()?;
    match projects::find_by_folder(&folder_name) {
        Some(project) => working_dir_for_project(project),
        None => Ok(std::env::current_dir()?),
    }
}

/// The directory of the project's first package.json, relative to the
/// current directory; the current directory itself when none is configured.
fn working_dir_for_project(project: &projects::Project) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    if let Some(first) = project.package_json_paths.first() {
        let parent = Path::new(first).parent().unwrap_or_else(|| Path::new(""));
        return Ok(cwd.join(parent));
    }
    Ok(cwd)
}

fn print_available() {
    for line in packages::describe_all() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_working_dir_comes_from_its_first_package_json() {
        let project = projects::find_by_folder("client-core").unwrap();
        let dir = working_dir_for_project(project).unwrap();
        assert!(dir.ends_with("packages/core"));
    }

    #[test]
    fn project_without_package_json_paths_keeps_the_current_dir() {
        let project = projects::find_by_folder("common-api-service").unwrap();
        let dir = working_dir_for_project(project).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
