// src/update.rs

//! Once-per-day self-update gate.
//!
//! Checking the registry for a newer version is slow, so it runs at most
//! once per calendar day. The last-checked date lives in the [`Store`];
//! when a newer version exists, the startup script reinstalls the tool and
//! the current process terminates.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use crate::errors::Result;
use crate::exec::{CommandRunner, ExecRequest};
use crate::platform::{Os, Platform};
use crate::store::Store;

/// Outcome of one pass through the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// A check already ran today; nothing was queried.
    AlreadyCheckedToday,
    /// The query ran and the tool is current.
    UpToDate,
    /// The query ran and found a newer version.
    UpdateAvailable,
    /// The outdated query could not be run; the check does not count.
    QueryFailed,
}

pub struct UpdateGate<'a> {
    store: &'a dyn Store,
    runner: &'a dyn CommandRunner,
    /// Package name passed to the registry's outdated query.
    package: String,
}

impl<'a> UpdateGate<'a> {
    pub fn new(
        store: &'a dyn Store,
        runner: &'a dyn CommandRunner,
        package: impl Into<String>,
    ) -> Self {
        Self {
            store,
            runner,
            package: package.into(),
        }
    }

    /// Decide whether an update query should run today and, if so, run it.
    ///
    /// The checked date is only persisted once the query actually produced
    /// a result, so a query that fails to start cannot mask the next day's
    /// legitimate check.
    pub async fn check(&self) -> Result<GateOutcome> {
        let mut db = self.store.load()?;
        let today = Local::now().date_naive();

        if let Some(last) = db.last_update_check_date.as_deref() {
            match last.parse::<NaiveDate>() {
                Ok(date) if date == today => {
                    debug!("update check already ran today");
                    return Ok(GateOutcome::AlreadyCheckedToday);
                }
                Ok(_) => debug!(last, "last update check was before today"),
                Err(_) => {
                    warn!(last, "unparseable last check date; treating as never checked");
                }
            }
        }

        // `npm outdated` exits non-zero and prints a table when the package
        // is behind; it prints nothing when current. This is a string
        // presence heuristic, not a structured parse.
        let request =
            ExecRequest::new(format!("npm outdated -g {}", self.package)).allow_stderr();
        let result = self.runner.run(request).await;

        if !result.completed && result.exit_code.is_none() {
            warn!(
                output = %result.output,
                "outdated query could not be run; not counting this as today's check"
            );
            return Ok(GateOutcome::QueryFailed);
        }

        db.last_update_check_date = Some(today.to_string());
        self.store.save(&db)?;

        if result.output.trim().is_empty() {
            debug!("package is up to date");
            Ok(GateOutcome::UpToDate)
        } else {
            debug!(output = %result.output, "outdated query output");
            Ok(GateOutcome::UpdateAvailable)
        }
    }
}

/// Run the platform startup script and terminate the current process.
///
/// The startup script reinstalls the tool, so control intentionally never
/// returns to the caller once an update is triggered.
pub async fn trigger_update(platform: &Platform, runner: &dyn CommandRunner) -> Result<()> {
    info!("running the startup script");

    if platform.os == Os::Windows {
        // `&` tells PowerShell to execute the quoted script path.
        let result = runner
            .run(ExecRequest::new(r#"& "$Home\startup.ps1""#).allow_stderr())
            .await;
        info!("{}", result.output.trim_end());
    } else {
        let result = runner
            .spawn_streaming(
                "zsh".to_string(),
                vec!["startup.sh".to_string()],
                platform.home_dir.clone(),
            )
            .await;
        if !result.completed {
            warn!(output = %result.output, "startup script did not run");
        }
    }

    std::process::exit(0);
}
