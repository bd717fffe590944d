// src/commands/clean.rs

//! `clean`: bulk cleanup commands.

use tracing::{error, info};

use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};
use crate::platform::{Os, Platform};

const VALID_TARGETS: &[&str] = &["branches"];

pub async fn clean(
    runner: &dyn CommandRunner,
    platform: &Platform,
    target: Option<&str>,
) -> Result<()> {
    let Some(target) = target else {
        error!("No target was specified. Valid targets:");
        print_valid_targets();
        return Ok(());
    };

    match target.to_lowercase().as_str() {
        "branches" => clean_branches(runner, platform).await,
        other => {
            error!("The target \"{other}\" is not a valid target. Valid targets:");
            print_valid_targets();
            Ok(())
        }
    }
}

/// Delete every local branch except `main`.
async fn clean_branches(runner: &dyn CommandRunner, platform: &Platform) -> Result<()> {
    let cmd = if platform.os == Os::Windows {
        r#"git branch -D @(git branch | select-string -NotMatch "main" | Foreach {$_.Line.Trim()})"#
    } else {
        r#"git branch | grep -v "main" | xargs git branch -D"#
    };

    let result = runner.run(ExecRequest::new(cmd)).await;
    info!("{}", result.output.trim_end());
    Ok(())
}

fn print_valid_targets() {
    for target in VALID_TARGETS {
        println!("- {target}");
    }
}
