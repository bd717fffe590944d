// src/commands/fpull.rs

//! `fpull`: fetch everything, then pull.

use tracing::info;

use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};

pub async fn fpull(runner: &dyn CommandRunner) -> Result<()> {
    // git fetch regularly writes informational text to stderr even when it
    // succeeds, so stderr is not treated as failure here.
    let fetch = runner
        .run(ExecRequest::new("git fetch -a").allow_stderr())
        .await;
    if !fetch.output.trim().is_empty() {
        info!("{}", fetch.output.trim_end());
    }

    let pull = runner.run(ExecRequest::new("git pull")).await;
    info!("{}", pull.output.trim_end());
    Ok(())
}
