use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::catalog::KEYRING_PKG;

/// Refresh the Arch keyring so signature checks succeed on a stale install.
pub struct RefreshKeyring;

impl Task for RefreshKeyring {
    fn name(&self) -> &'static str {
        "Refresh keyring"
    }

    fn needs_root(&self) -> bool {
        true
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.keyring
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let args = ["pacman", "-S", "--needed", "--noconfirm", KEYRING_PKG];
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
