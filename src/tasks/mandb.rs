use anyhow::Result;

use super::{Context, Task, TaskResult};

/// Rebuild the manual-page database after new packages land.
pub struct UpdateManDb;

impl Task for UpdateManDb {
    fn name(&self) -> &'static str {
        "Update man database"
    }

    fn needs_root(&self) -> bool {
        true
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.actions.update_mandb
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let args = ["mandb", "--quiet"];
        if ctx.dry_run {
            ctx.log.dry_run(&format!("sudo {}", args.join(" ")));
            return Ok(TaskResult::DryRun);
        }

        if !ctx.executor.which("mandb") {
            return Ok(TaskResult::Skipped("mandb not found".to_string()));
        }

        let result = ctx.executor.run_sudo(&args, ctx.sudo_password()?)?;
        if !result.success {
            anyhow::bail!("mandb exited with status {}", result.code.unwrap_or(-1));
        }
        Ok(TaskResult::Ok)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::cli::Actions;
    use crate::logging::Logger;
    use crate::tasks::test_helpers::{Call, RecordingExecutor};

    #[test]
    fn rebuilds_the_database_through_sudo() {
        let log = Logger::new();
        let executor = RecordingExecutor::new();
        let mut ctx = Context::new(
            Actions {
                update_mandb: true,
                ..Actions::none()
            },
            &log,
            &executor,
            false,
        );
        ctx.set_sudo_password("secret".to_string());

        assert_eq!(UpdateManDb.run(&ctx).unwrap(), TaskResult::Ok);
        assert_eq!(
            executor.recorded(),
            [Call::Sudo {
                args: vec!["mandb".to_string(), "--quiet".to_string()],
            }]
        );
    }

    #[test]
    fn skips_when_mandb_is_missing() {
        let log = Logger::new();
        let executor = RecordingExecutor::without_binaries();
        let ctx = Context::new(
            Actions {
                update_mandb: true,
                ..Actions::none()
            },
            &log,
            &executor,
            false,
        );
        assert!(matches!(
            UpdateManDb.run(&ctx).unwrap(),
            TaskResult::Skipped(_)
        ));
    }

    #[test]
    fn requires_root() {
        assert!(UpdateManDb.needs_root());
    }
}
