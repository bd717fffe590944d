// src/exec/runner.rs

//! Shell command execution with structured results.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::platform::Platform;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A single external command invocation. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct ExecRequest {
    /// The full command line, handed to the platform shell as one string.
    pub command_line: String,
    pub working_dir: Option<PathBuf>,
    /// Treat any stderr output as failure. `git fetch` writes informational
    /// text to stderr even when it succeeds, so some callers turn this off.
    pub fail_on_stderr: bool,
    /// Echo captured stdout at info level once the command finishes.
    pub verbose: bool,
}

impl ExecRequest {
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
            fail_on_stderr: true,
            verbose: false,
        }
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn allow_stderr(mut self) -> Self {
        self.fail_on_stderr = false;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Outcome of one [`ExecRequest`]. Produced exactly once per request.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Whether the command ran to completion successfully.
    pub completed: bool,
    /// Captured output: stdout on success, the failing stream otherwise.
    pub output: String,
    /// Exit code, when the process got far enough to produce one. `None`
    /// distinguishes "could not start" and "timed out" from "ran and failed".
    pub exit_code: Option<i32>,
}

impl ExecResult {
    /// The executable could not be located or spawned.
    pub fn startup_failure(err: impl std::fmt::Display) -> Self {
        Self {
            completed: false,
            output: err.to_string(),
            exit_code: None,
        }
    }
}

/// Trait abstracting how external commands are executed.
///
/// Production code uses [`ShellRunner`]; tests can provide their own
/// implementation that doesn't spawn real processes.
pub trait CommandRunner: Send + Sync {
    /// Run a one-string command line in the platform shell and wait for it.
    fn run(&self, request: ExecRequest) -> BoxFuture<'_, ExecResult>;

    /// Same contract as [`CommandRunner::run`], but the invocation is
    /// abandoned and reported as not completed once `timeout` elapses.
    ///
    /// Used for commands that legitimately never return, like launching a
    /// GUI editor.
    fn run_with_timeout(
        &self,
        request: ExecRequest,
        timeout: Duration,
    ) -> BoxFuture<'_, ExecResult>;

    /// Launch a long-running child process, forwarding its stdout and stderr
    /// line-by-line in arrival order, and resolve when it exits with the
    /// concatenated output.
    fn spawn_streaming(
        &self,
        program: String,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> BoxFuture<'_, ExecResult>;
}

/// Real command runner used in production. The shell for one-string command
/// lines comes from the injected [`Platform`].
#[derive(Debug, Clone)]
pub struct ShellRunner {
    platform: Platform,
}

impl ShellRunner {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    async fn run_inner(&self, request: ExecRequest) -> ExecResult {
        debug!(cmd = %request.command_line, "running command");

        let (program, args) = self.platform.shell_command(&request.command_line);
        let mut cmd = Command::new(&program);
        cmd.args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &request.working_dir {
            cmd.current_dir(dir);
        }

        let output = match cmd.output().await {
            Ok(output) => output,
            Err(err) => {
                error!(cmd = %request.command_line, error = %err, "failed to start command");
                return ExecResult::startup_failure(err);
            }
        };

        let mut stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        if request.fail_on_stderr && !stderr.is_empty() {
            error!(
                cmd = %request.command_line,
                "command wrote to stderr:\n{}",
                stderr.trim_end()
            );
            return ExecResult {
                completed: false,
                output: stderr,
                exit_code,
            };
        }

        if !output.status.success() {
            error!(
                cmd = %request.command_line,
                exit_code,
                "command exited with failure:\n{}",
                stderr.trim_end()
            );
            let output = if stderr.is_empty() { stdout } else { stderr };
            return ExecResult {
                completed: false,
                output,
                exit_code,
            };
        }

        // Callers that opted out of stderr-as-failure still want to see what
        // the tool said there.
        if !request.fail_on_stderr && !stderr.is_empty() {
            if !stdout.is_empty() && !stdout.ends_with('\n') {
                stdout.push('\n');
            }
            stdout.push_str(&stderr);
        }

        if request.verbose && !stdout.is_empty() {
            info!("{}", stdout.trim_end());
        }

        ExecResult {
            completed: true,
            output: stdout,
            exit_code,
        }
    }

    async fn run_with_timeout_inner(
        &self,
        request: ExecRequest,
        timeout: Duration,
    ) -> ExecResult {
        let cmd_line = request.command_line.clone();
        match tokio::time::timeout(timeout, self.run_inner(request)).await {
            Ok(result) => result,
            // The child is killed on drop; the command is reported as
            // abandoned rather than crashed.
            Err(_) => {
                info!(
                    cmd = %cmd_line,
                    timeout_ms = timeout.as_millis() as u64,
                    "command did not finish within the timeout; abandoning"
                );
                ExecResult {
                    completed: false,
                    output: format!(
                        "command did not finish within {}ms",
                        timeout.as_millis()
                    ),
                    exit_code: None,
                }
            }
        }
    }

    async fn spawn_streaming_inner(
        &self,
        program: String,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> ExecResult {
        info!(program = %program, ?args, "spawning streaming process");

        let mut cmd = Command::new(&program);
        cmd.args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &working_dir {
            cmd.current_dir(dir);
        }

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => {
                error!(program = %program, error = %err, "failed to spawn streaming process");
                return ExecResult::startup_failure(err);
            }
        };

        // Both streams feed one channel so lines are forwarded in arrival
        // order, not separated by stream.
        let (line_tx, mut line_rx) = mpsc::channel::<String>(64);
        if let Some(stdout) = child.stdout.take() {
            spawn_line_forwarder(stdout, line_tx.clone());
        }
        if let Some(stderr) = child.stderr.take() {
            spawn_line_forwarder(stderr, line_tx.clone());
        }
        drop(line_tx);

        let collector = tokio::spawn(async move {
            let mut captured = String::new();
            while let Some(line) = line_rx.recv().await {
                println!("{line}");
                captured.push_str(&line);
                captured.push('\n');
            }
            captured
        });

        let status = match child.wait().await {
            Ok(status) => status,
            Err(err) => {
                error!(program = %program, error = %err, "waiting for streaming process failed");
                return ExecResult {
                    completed: false,
                    output: err.to_string(),
                    exit_code: None,
                };
            }
        };

        let output = collector.await.unwrap_or_default();
        info!(
            program = %program,
            exit_code = status.code(),
            "streaming process exited"
        );

        // `completed` here means the child ran and exited, as opposed to
        // never starting; the exit code carries the rest.
        ExecResult {
            completed: true,
            output,
            exit_code: status.code(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, request: ExecRequest) -> BoxFuture<'_, ExecResult> {
        Box::pin(self.run_inner(request))
    }

    fn run_with_timeout(
        &self,
        request: ExecRequest,
        timeout: Duration,
    ) -> BoxFuture<'_, ExecResult> {
        Box::pin(self.run_with_timeout_inner(request, timeout))
    }

    fn spawn_streaming(
        &self,
        program: String,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> BoxFuture<'_, ExecResult> {
        Box::pin(self.spawn_streaming_inner(program, args, working_dir))
    }
}

fn spawn_line_forwarder<R>(reader: R, tx: mpsc::Sender<String>)
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });
}
