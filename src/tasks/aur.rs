use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::catalog::PARU_PKGS;

/// Install the AUR package set via paru.
///
/// paru refuses to run as root and performs its own privilege escalation
/// for the install step, so this shells out unprivileged.
pub struct InstallAurPackages;

impl Task for InstallAurPackages {
    fn name(&self) -> &'static str {
        "Install AUR packages"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.paru_pkgs
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut args = vec!["-S", "--needed", "--noconfirm"];
        args.extend_from_slice(PARU_PKGS);

        if ctx.dry_run {
            ctx.log.dry_run(&format!("paru {}", args.join(" ")));
            return Ok(TaskResult::DryRun);
        }

        if !ctx.executor.which("paru") {
            return Ok(TaskResult::Skipped("paru not installed".to_string()));
        }

        let result = ctx.executor.run_interactive("paru", &args)?;
        if !result.success {
            anyhow::bail!("paru exited with status {}", result.code.unwrap_or(-1));
        }
        Ok(TaskResult::Ok)
    }
}
