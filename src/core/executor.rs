//! Synchronous shell command execution.
//!
//! Every git invocation goes through a [`CommandExecutor`]. The production
//! implementation, [`ShellExecutor`], hands a fully formed command line to the
//! platform shell and waits for it to exit. A non-zero exit is data, not an error:
//! it comes back as an [`ExecutionResult`] with `succeeded == false` so the caller
//! decides what the failure means.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Outcome of running one external command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub succeeded: bool,
}

impl ExecutionResult {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            succeeded: true,
        }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            succeeded: false,
        }
    }

    /// Stdout of a successful run, empty string otherwise
    pub fn stdout_or_empty(&self) -> &str {
        if self.succeeded {
            &self.stdout
        } else {
            ""
        }
    }

    /// Whatever the command printed, preferring stdout
    pub fn output_text(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }
}

/// Runs a command line to completion and reports what happened
pub trait CommandExecutor {
    fn execute(&self, command: &str) -> ExecutionResult;
}

/// Executes commands through `sh -c` (or `cmd /C` on Windows)
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor {
    working_dir: Option<PathBuf>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from `dir` instead of the process working directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            working_dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    fn shell_command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&self, command: &str) -> ExecutionResult {
        let mut cmd = Self::shell_command(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        log::debug!("$ {command}");

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("Failed to spawn '{command}': {e}");
                return ExecutionResult::failure(format!("failed to run '{command}': {e}"));
            }
        };

        let result = ExecutionResult {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            succeeded: output.status.success(),
        };

        log::debug!("  exit: {} ({} bytes stdout)", output.status, result.stdout.len());
        result
    }
}
