//! Process execution for package-manager shell-outs.
//!
//! Everything external goes through the [`Executor`] trait so tasks can be
//! exercised against a recording double. Exit codes are reported, not
//! enforced: callers decide what a non-zero status means.
use std::io::Write as _;
use std::process::{Command, ExitStatus, Output, Stdio};

use anyhow::Result;
use thiserror::Error;

/// Result of a command execution.
///
/// For interactive and sudo runs the output streams are inherited by the
/// terminal, so `stdout`/`stderr` are empty and only the status is reported.
#[derive(Debug)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

impl From<ExitStatus> for ExecResult {
    fn from(status: ExitStatus) -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Errors spawning or driving an external process.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write to stdin of {program}: {source}")]
    Stdin {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Seam for running external commands (real system calls or test doubles).
pub trait Executor {
    /// Run a command with output captured. A non-zero exit is reported in
    /// the result, not treated as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be spawned.
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run a command with stdio inherited so its progress is visible.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command cannot be spawned.
    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExecResult>;

    /// Run `sudo -S <args…>`, feeding `password` on stdin. Output is
    /// inherited so the underlying command's progress is visible.
    ///
    /// # Errors
    ///
    /// Returns an error if sudo cannot be spawned or the password cannot be
    /// written to its stdin.
    fn run_sudo(&self, args: &[&str], password: &str) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// Executor that runs real system commands.
#[derive(Debug)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;
        Ok(ExecResult::from(output))
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;
        Ok(ExecResult::from(status))
    }

    fn run_sudo(&self, args: &[&str], password: &str) -> Result<ExecResult> {
        // -S reads the password from stdin; an empty -p keeps sudo's own
        // prompt off the terminal. When the sudo timestamp is still fresh
        // the password is simply never read.
        let mut child = Command::new("sudo")
            .args(["-S", "-p", ""])
            .args(args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                program: "sudo".to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(password.as_bytes())
                .and_then(|()| stdin.write_all(b"\n"))
                .map_err(|source| ExecError::Stdin {
                    program: "sudo".to_string(),
                    source,
                })?;
        }

        let status = child.wait().map_err(|source| ExecError::Wait {
            program: "sudo".to_string(),
            source,
        })?;
        Ok(ExecResult::from(status))
    }

    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
