use anyhow::Result;

use super::{Context, Task, TaskResult};

/// Upgrade all installed system packages.
pub struct SystemUpgrade;

impl Task for SystemUpgrade {
    fn name(&self) -> &'static str {
        "System upgrade"
    }

    fn needs_root(&self) -> bool {
        true
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.system_upgrade
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let args = ["pacman", "-Su", "--noconfirm"];
        if ctx.dry_run {
            ctx.log.dry_run(&format!("sudo {}", args.join(" ")));
            return Ok(TaskResult::DryRun);
        }

        let result = ctx.executor.run_sudo(&args, ctx.sudo_password()?)?;
        if !result.success {
            anyhow::bail!("pacman exited with status {}", result.code.unwrap_or(-1));
        }
        Ok(TaskResult::Ok)
    }
}
