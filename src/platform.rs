// src/platform.rs

//! Platform detection, resolved once at startup.
//!
//! Every OS-conditional decision (which shell wraps a command line, which
//! terminal gets new tabs, where the home directory is) goes through a
//! [`Platform`] value built by [`Platform::detect`] instead of re-querying
//! environment variables at each call site. This keeps the detection in one
//! place and lets tests construct arbitrary platforms.

use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
    Unknown,
}

/// The shell used to run one-string command lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Sh,
    /// PowerShell Core (`pwsh`), preferred on Windows when installed.
    PowerShellCore,
    Cmd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    WindowsTerminal,
    ITerm2,
    Unknown,
}

/// Capabilities of the machine this invocation runs on.
#[derive(Debug, Clone)]
pub struct Platform {
    pub os: Os,
    pub shell: Shell,
    pub terminal: Terminal,
    pub home_dir: Option<PathBuf>,
}

impl Platform {
    pub fn detect() -> Self {
        let os = if cfg!(windows) {
            Os::Windows
        } else if cfg!(target_os = "macos") {
            Os::MacOs
        } else if cfg!(target_os = "linux") {
            Os::Linux
        } else {
            Os::Unknown
        };

        let shell = match os {
            Os::Windows => {
                if pwsh_available() {
                    Shell::PowerShellCore
                } else {
                    Shell::Cmd
                }
            }
            _ => Shell::Sh,
        };

        Self {
            os,
            shell,
            terminal: detect_terminal(),
            home_dir: dirs::home_dir(),
        }
    }

    /// Build the shell invocation for a full command line.
    pub fn shell_command(&self, command_line: &str) -> (String, Vec<String>) {
        match self.shell {
            Shell::Sh => (
                "sh".to_string(),
                vec!["-c".to_string(), command_line.to_string()],
            ),
            Shell::PowerShellCore => (
                "pwsh".to_string(),
                vec!["-Command".to_string(), command_line.to_string()],
            ),
            Shell::Cmd => (
                "cmd".to_string(),
                vec!["/C".to_string(), command_line.to_string()],
            ),
        }
    }
}

/// Name of the current working directory's folder.
pub fn current_folder_name() -> crate::errors::Result<String> {
    let cwd = std::env::current_dir()?;
    Ok(cwd
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default())
}

fn detect_terminal() -> Terminal {
    // WT_SESSION is the documented way to detect the new Windows Terminal.
    if std::env::var_os("WT_SESSION").is_some() {
        return Terminal::WindowsTerminal;
    }
    if std::env::var("TERM_PROGRAM").as_deref() == Ok("iTerm.app") {
        return Terminal::ITerm2;
    }
    Terminal::Unknown
}

fn pwsh_available() -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths)
        .any(|p| p.join("pwsh.exe").is_file() || p.join("pwsh").is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_with_shell(shell: Shell) -> Platform {
        Platform {
            os: Os::Linux,
            shell,
            terminal: Terminal::Unknown,
            home_dir: None,
        }
    }

    #[test]
    fn sh_wraps_the_whole_command_line() {
        let (program, args) = platform_with_shell(Shell::Sh).shell_command("echo hi && ls");
        assert_eq!(program, "sh");
        assert_eq!(args, vec!["-c".to_string(), "echo hi && ls".to_string()]);
    }

    #[test]
    fn pwsh_uses_command_flag() {
        let (program, args) =
            platform_with_shell(Shell::PowerShellCore).shell_command("Get-ChildItem");
        assert_eq!(program, "pwsh");
        assert_eq!(args[0], "-Command");
    }

    #[test]
    fn cmd_uses_slash_c() {
        let (program, args) = platform_with_shell(Shell::Cmd).shell_command("dir");
        assert_eq!(program, "cmd");
        assert_eq!(args[0], "/C");
    }
}
