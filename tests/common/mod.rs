// Shared helpers for integration tests.
//
// Provides a recording executor so each integration test can drive the full
// task pipeline through the public API and assert on the exact external
// commands it would have issued.
#![allow(dead_code)]

use std::sync::{Mutex, PoisonError};

use anyhow::Result;

use arch_setup::exec::{ExecResult, Executor};

/// A single recorded executor invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Run { program: String, args: Vec<String> },
    Interactive { program: String, args: Vec<String> },
    Sudo { args: Vec<String> },
}

/// Executor that records every invocation instead of running it.
#[derive(Debug)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<Call>>,
    pub which_result: bool,
    pub fail: bool,
}

impl Default for RecordingExecutor {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            which_result: true,
            fail: false,
        }
    }
}

impl RecordingExecutor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executor whose commands all report a non-zero exit.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: Call) -> ExecResult {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
        ExecResult {
            stdout: String::new(),
            stderr: String::new(),
            success: !self.fail,
            code: Some(i32::from(self.fail)),
        }
    }
}

impl Executor for RecordingExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        Ok(self.record(Call::Run {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }))
    }

    fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExecResult> {
        Ok(self.record(Call::Interactive {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }))
    }

    fn run_sudo(&self, args: &[&str], _password: &str) -> Result<ExecResult> {
        Ok(self.record(Call::Sudo {
            args: args.iter().map(ToString::to_string).collect(),
        }))
    }

    fn which(&self, _program: &str) -> bool {
        self.which_result
    }
}
