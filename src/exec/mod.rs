// src/exec/mod.rs

//! External process execution.
//!
//! Two modes:
//! - one-shot shell commands with captured output ([`CommandRunner::run`]
//!   and the timeout variant), and
//! - long-running streamed children whose output is forwarded line-by-line
//!   as it arrives ([`CommandRunner::spawn_streaming`]).
//!
//! Commands never fail with an `Err` at this boundary: the caller always
//! gets an [`ExecResult`] and decides whether the failure is fatal.

mod runner;

pub use runner::{BoxFuture, CommandRunner, ExecRequest, ExecResult, ShellRunner};
