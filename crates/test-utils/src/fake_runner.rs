use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use toolbelt::exec::{BoxFuture, CommandRunner, ExecRequest, ExecResult};

type Handler = dyn Fn(&ExecRequest) -> ExecResult + Send + Sync;

/// A fake command runner that:
/// - records every command line it was asked to run
/// - answers each request via an optional handler, defaulting to success
///   with empty output.
pub struct FakeRunner {
    commands: Arc<Mutex<Vec<String>>>,
    handler: Option<Box<Handler>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            handler: None,
        }
    }

    pub fn with_handler(
        handler: impl Fn(&ExecRequest) -> ExecResult + Send + Sync + 'static,
    ) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            handler: Some(Box::new(handler)),
        }
    }

    /// Every command line run so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    fn respond(&self, request: &ExecRequest) -> ExecResult {
        self.commands
            .lock()
            .unwrap()
            .push(request.command_line.clone());
        match &self.handler {
            Some(handler) => handler(request),
            None => ExecResult {
                completed: true,
                output: String::new(),
                exit_code: Some(0),
            },
        }
    }
}

impl Default for FakeRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for FakeRunner {
    fn run(&self, request: ExecRequest) -> BoxFuture<'_, ExecResult> {
        let result = self.respond(&request);
        Box::pin(async move { result })
    }

    fn run_with_timeout(
        &self,
        request: ExecRequest,
        _timeout: Duration,
    ) -> BoxFuture<'_, ExecResult> {
        self.run(request)
    }

    fn spawn_streaming(
        &self,
        program: String,
        args: Vec<String>,
        working_dir: Option<PathBuf>,
    ) -> BoxFuture<'_, ExecResult> {
        let mut line = program;
        for arg in &args {
            line.push(' ');
            line.push_str(arg);
        }
        let mut request = ExecRequest::new(line);
        if let Some(dir) = working_dir {
            request = request.working_dir(dir);
        }
        let result = self.respond(&request);
        Box::pin(async move { result })
    }
}
