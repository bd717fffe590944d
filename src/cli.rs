// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `toolbelt`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "toolbelt",
    version,
    about = "Personal command-line utility belt.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Run with verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `--verbose`, `TOOLBELT_LOG` or a default level is used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Skip the once-per-day update check for this invocation.
    #[arg(long, global = true)]
    pub skip_update_check: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Echo a test response to make sure the tool is wired up.
    Test {
        #[arg(trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Force an update of this tool.
    Update,

    /// Run `git fetch -a` followed by `git pull`.
    Fpull,

    /// Run the setup routine configured for the current folder.
    Setup,

    /// Open the current project in the preferred editor.
    Open,

    /// Run the startup script for this machine.
    Startup,

    /// Create a new project from a template.
    Scaffold {
        /// Template type, e.g. `node-cli`.
        project_type: Option<String>,
        /// Name of the new project folder.
        name: Option<String>,
        /// List available templates.
        #[arg(long)]
        list: bool,
    },

    /// Clean a target (e.g. local git branches).
    Clean { target: Option<String> },

    /// Download the video series listed in `videos.toml`.
    DownloadVideos {
        /// Download one file at a time instead of all at once.
        #[arg(long)]
        sequential: bool,
    },

    /// Normalize and merge the numbered videos in a folder.
    MergeVideos { folder: String },

    /// Download all configured series, then merge each folder.
    DownloadAndMergeVideos,

    /// Merge the videos in every folder of the current directory.
    MergeAllVideos,

    /// Package publish helpers.
    Pkg { action: Option<String> },

    /// Subscribe to a local package.
    Sub { package_prefix: Option<String> },

    /// Unsubscribe from a local package.
    Unsub { package_prefix: Option<String> },

    /// Watch and republish a local package during development.
    Dev { package_prefix: Option<String> },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
