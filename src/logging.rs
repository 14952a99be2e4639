//! Logging, the stage banner, and the run summary.
use std::sync::{Mutex, PoisonError};

use tracing_subscriber::EnvFilter;

/// Total width of a stage banner line.
pub const BANNER_WIDTH: usize = 60;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug level.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .without_time()
        .with_env_filter(filter)
        .init();
}

/// Build a fixed-width banner line with the title centered in a run of `=`.
///
/// Titles too long to center still get a minimal `==` fence on each side, so
/// the line never truncates the title itself.
#[must_use]
pub fn banner(title: &str) -> String {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    if width + 4 > BANNER_WIDTH {
        return format!("=={inner}==");
    }
    let pad = BANNER_WIDTH - width;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{inner}{}", "=".repeat(left), "=".repeat(right))
}

/// Task execution result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    pub name: String,
    pub status: TaskStatus,
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Ok,
    NotApplicable,
    Skipped,
    DryRun,
    Failed,
}

/// Logger with dry-run awareness and summary collection.
///
/// Messages go through `tracing`; the stage banner and the final summary are
/// written straight to stdout since they are the tool's primary output.
#[derive(Debug, Default)]
pub struct Logger {
    tasks: Mutex<Vec<TaskEntry>>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message (shown with `--verbose` or `RUST_LOG=debug`).
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!("[dry-run] {msg}");
    }

    /// Print the banner that precedes an action's output.
    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m{}\x1b[0m", banner(msg));
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        let mut tasks = self
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        tasks.push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Number of tasks recorded as failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count()
    }

    /// Return a clone of all recorded task entries (test-only).
    #[cfg(test)]
    pub(crate) fn task_entries(&self) -> Vec<TaskEntry> {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Print the summary of all recorded tasks.
    pub fn print_summary(&self) {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        if tasks.is_empty() {
            return;
        }

        println!();
        println!("\x1b[1;34m{}\x1b[0m", banner("Summary"));

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for task in tasks.iter() {
            let (icon, color) = match task.status {
                TaskStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                TaskStatus::NotApplicable => {
                    not_applicable += 1;
                    ("·", "\x1b[2m")
                }
                TaskStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                TaskStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[33m")
                }
                TaskStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = match &task.message {
                Some(msg) => format!(" ({msg})"),
                None => String::new(),
            };
            println!("  {color}{icon} {}{suffix}\x1b[0m", task.name);
        }

        println!();
        let total = ok + not_applicable + skipped + dry_run + failed;
        println!(
            "  {total} tasks: \x1b[32m{ok} ok\x1b[0m, {not_applicable} n/a, \x1b[33m{skipped} skipped\x1b[0m, {dry_run} dry-run, \x1b[31m{failed} failed\x1b[0m"
        );
    }
}
