//! Process execution utilities
//!
//! Provides safe process execution with proper error handling and logging.
//! Every pipeline step is a blocking external process; a non-zero exit maps
//! to [`PublishError::Process`] and aborts the run.

use crate::error::{PublishError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

/// Captured output of a process execution
#[derive(Debug)]
pub struct ProcessOutput {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command in the current directory, inheriting stdout/stderr
    #[instrument(skip(self))]
    pub fn run(&self, command: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(command);
        cmd.args(args);
        self.run_checked(cmd, command, args)
    }

    /// Run a command in a specific directory, inheriting stdout/stderr
    #[instrument(skip(self, dir))]
    pub fn run_in(&self, dir: &Path, command: &str, args: &[&str]) -> Result<()> {
        let mut cmd = Command::new(command);
        cmd.args(args).current_dir(dir);
        self.run_checked(cmd, command, args)
    }

    fn run_checked(&self, mut cmd: Command, command: &str, args: &[&str]) -> Result<()> {
        let cmd_str = format_command(command, args);

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| {
            PublishError::process(
                cmd_str.clone(),
                None,
                String::new(),
                format!("Failed to execute command: {e}"),
            )
        })?;

        if !status.success() {
            let exit_code = status.code();
            return Err(PublishError::process(
                cmd_str,
                exit_code,
                String::new(),
                format!("Command failed with exit code: {exit_code:?}"),
            ));
        }

        debug!("Command completed successfully");
        Ok(())
    }

    /// Run a command in a specific directory and capture its output
    #[instrument(skip(self, dir))]
    pub fn run_capture_in(
        &self,
        dir: &Path,
        command: &str,
        args: &[&str],
    ) -> Result<ProcessOutput> {
        let cmd_str = format_command(command, args);

        debug!("Running command with output capture: {}", cmd_str);

        let output = Command::new(command)
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                PublishError::process(
                    cmd_str.clone(),
                    None,
                    String::new(),
                    format!("Failed to execute command: {e}"),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code();

        debug!(
            "Command finished: exit_code={:?}, stdout_len={}, stderr_len={}",
            exit_code,
            stdout.len(),
            stderr.len()
        );

        if !output.status.success() {
            debug!("Command stderr: {}", stderr);
            return Err(PublishError::process(cmd_str, exit_code, stdout, stderr));
        }

        Ok(ProcessOutput {
            exit_code,
            stdout,
            stderr,
        })
    }

    /// Check if a command exists in PATH
    #[instrument(skip(self))]
    pub fn command_exists(&self, command: &str) -> bool {
        let result = Command::new("which")
            .arg(command)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) => {
                let exists = status.success();
                debug!("Command '{}' exists: {}", command, exists);
                exists
            }
            Err(e) => {
                debug!("Failed to check if command '{}' exists: {}", command, e);
                false
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

fn format_command(command: &str, args: &[&str]) -> String {
    if args.is_empty() {
        command.to_string()
    } else {
        format!("{} {}", command, args.join(" "))
    }
}
