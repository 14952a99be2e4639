//! Named provisioning tasks executed in a fixed order.
pub mod aur;
mod context;
pub mod flatpak;
pub mod keyring;
pub mod mandb;
pub mod pacman;
pub mod upgrade;

pub use context::Context;

use anyhow::Result;

use crate::logging::TaskStatus;

/// Outcome of a task that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    Ok,
    Skipped(String),
    DryRun,
}

/// A named, executable provisioning action.
pub trait Task {
    /// Human-readable task name.
    fn name(&self) -> &str;

    /// Whether this task shells out through sudo. Drives the single
    /// password prompt at the start of a run.
    fn needs_root(&self) -> bool {
        false
    }

    /// Whether this task was enabled on the command line.
    fn should_run(&self, ctx: &Context) -> bool;

    /// Execute the task.
    ///
    /// # Errors
    ///
    /// Returns an error if the external command cannot be spawned or exits
    /// non-zero.
    fn run(&self, ctx: &Context) -> Result<TaskResult>;
}

/// Every provisioning task in its fixed execution order: keyring first so a
/// stale trust store cannot fail the later pacman steps, mandb last so new
/// man pages are indexed.
#[must_use]
pub fn all_tasks() -> Vec<Box<dyn Task>> {
    vec![
        Box::new(keyring::RefreshKeyring),
        Box::new(upgrade::SystemUpgrade),
        Box::new(pacman::InstallPacmanPackages),
        Box::new(flatpak::InstallFlatpakApps),
        Box::new(aur::InstallAurPackages),
        Box::new(mandb::UpdateManDb),
    ]
}

/// Execute a task, recording the result in the logger.
///
/// A failing task is recorded and logged but never aborts the sequence; the
/// caller moves on to the next task.
pub fn execute(task: &dyn Task, ctx: &Context) {
    if !task.should_run(ctx) {
        ctx.log
            .debug(&format!("skipping task: {} (not requested)", task.name()));
        ctx.log
            .record_task(task.name(), TaskStatus::NotApplicable, None);
        return;
    }

    ctx.log.stage(task.name());

    match task.run(ctx) {
        Ok(TaskResult::Ok) => {
            ctx.log.record_task(task.name(), TaskStatus::Ok, None);
        }
        Ok(TaskResult::Skipped(reason)) => {
            ctx.log.info(&format!("skipped: {reason}"));
            ctx.log
                .record_task(task.name(), TaskStatus::Skipped, Some(&reason));
        }
        Ok(TaskResult::DryRun) => {
            ctx.log.record_task(task.name(), TaskStatus::DryRun, None);
        }
        Err(e) => {
            ctx.log.error(&format!("{}: {e:#}", task.name()));
            ctx.log
                .record_task(task.name(), TaskStatus::Failed, Some(&format!("{e:#}")));
        }
    }
}
