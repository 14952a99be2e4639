use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::catalog::FLATPAK_APPS;

/// Install the Flatpak application set from the flathub remote.
///
/// Runs unprivileged; flatpak manages its own installation scope. The
/// flatpak binary itself comes from the pacman set, so this soft-skips
/// when it is not on PATH yet.
pub struct InstallFlatpakApps;

impl Task for InstallFlatpakApps {
    fn name(&self) -> &'static str {
        "Install flatpak apps"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.flatpak_apps
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut args = vec!["install", "-y", "flathub"];
        args.extend_from_slice(FLATPAK_APPS);

        if ctx.dry_run {
            ctx.log.dry_run(&format!("flatpak {}", args.join(" ")));
            return Ok(TaskResult::DryRun);
        }

        if !ctx.executor.which("flatpak") {
            return Ok(TaskResult::Skipped("flatpak not found".to_string()));
        }

        let result = ctx.executor.run_interactive("flatpak", &args)?;
        if !result.success {
            anyhow::bail!("flatpak exited with status {}", result.code.unwrap_or(-1));
        }
        Ok(TaskResult::Ok)
    }
}
