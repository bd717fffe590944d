// src/commands/pkg.rs

//! `pkg`: package registry publish helpers.

use tracing::{error, info};

use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};

const ACTIONS: &[&str] = &["validateJsr", "publishJsr"];

pub async fn pkg(runner: &dyn CommandRunner, action: Option<&str>) -> Result<()> {
    match action {
        Some("validateJsr") => validate_jsr(runner).await,
        Some("publishJsr") => publish_jsr(runner).await,
        Some(other) => {
            error!("The package action {other} is not supported. Supported actions:");
            print_actions();
            Ok(())
        }
        None => {
            error!("No package action was given. Supported actions:");
            print_actions();
            Ok(())
        }
    }
}

/// Dry-run publish to catch packaging problems before the real thing.
async fn validate_jsr(runner: &dyn CommandRunner) -> Result<()> {
    let result = runner
        .run(
            ExecRequest::new("npx jsr publish --dry-run")
                .allow_stderr()
                .verbose(true),
        )
        .await;
    if result.completed {
        info!("JSR validation passed");
    } else {
        error!("JSR validation failed:\n{}", result.output);
    }
    Ok(())
}

async fn publish_jsr(runner: &dyn CommandRunner) -> Result<()> {
    let result = runner
        .run(ExecRequest::new("npx jsr publish").allow_stderr().verbose(true))
        .await;
    if result.completed {
        info!("Published to JSR");
    } else {
        error!("Publishing to JSR failed:\n{}", result.output);
    }
    Ok(())
}

fn print_actions() {
    for action in ACTIONS {
        println!("- {action}");
    }
}
