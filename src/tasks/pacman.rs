use anyhow::Result;

use super::{Context, Task, TaskResult};
use crate::catalog::PACMAN_PKGS;

/// Install the fixed pacman package set in one batch invocation.
///
/// `--needed` makes the batch cheap to re-run: already-installed packages
/// are left untouched without any state being queried up front.
pub struct InstallPacmanPackages;

impl Task for InstallPacmanPackages {
    fn name(&self) -> &'static str {
        "Install pacman packages"
    }

    fn needs_root(&self) -> bool {
        true
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.pacman_pkgs
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let mut args = vec!["pacman", "-S", "--needed", "--noconfirm"];
        args.extend_from_slice(PACMAN_PKGS);

        ctx.log
            .debug(&format!("{} packages in the pacman set", PACMAN_PKGS.len()));
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

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;
    use crate::cli::Actions;
    use crate::logging::Logger;
    use crate::tasks::test_helpers::{Call, RecordingExecutor};

    #[test]
    fn installs_the_whole_set_in_one_batch() {
        let log = Logger::new();
        let executor = RecordingExecutor::new();
        let mut ctx = Context::new(
            Actions {
                pacman_pkgs: true,
                ..Actions::none()
            },
            &log,
            &executor,
            false,
        );
        ctx.set_sudo_password("secret".to_string());

        assert_eq!(InstallPacmanPackages.run(&ctx).unwrap(), TaskResult::Ok);
        let recorded = executor.recorded();
        assert_eq!(recorded.len(), 1, "expected a single batch invocation");

        let Call::Sudo { args } = &recorded[0] else {
            panic!("expected a sudo invocation");
        };
        assert_eq!(args[..4], ["pacman", "-S", "--needed", "--noconfirm"]);
        assert_eq!(args.len(), 4 + PACMAN_PKGS.len());
        for pkg in PACMAN_PKGS {
            assert!(args.iter().any(|a| a == pkg), "missing package {pkg}");
        }
    }

    #[test]
    fn not_enabled_by_other_flags() {
        let log = Logger::new();
        let executor = RecordingExecutor::new();
        let ctx = Context::new(
            Actions {
                flatpak_apps: true,
                paru_pkgs: true,
                ..Actions::none()
            },
            &log,
            &executor,
            false,
        );
        assert!(!InstallPacmanPackages.should_run(&ctx));
    }
}
