//! Top-level orchestration for the single provisioning command.
use anyhow::Result;

use crate::cli::{Actions, Cli};
use crate::exec::SystemExecutor;
use crate::logging::Logger;
use crate::platform;
use crate::prompt;
use crate::tasks::{self, Context, Task};

/// Run the provisioning command: resolve the enabled actions, capture the
/// sudo password when some enabled task needs root, then execute every task
/// in its fixed order and print the summary.
///
/// # Errors
///
/// Returns an error if the password prompt fails or if one or more tasks
/// failed.
pub fn run(cli: &Cli, log: &Logger) -> Result<()> {
    let actions = Actions::from_cli(cli);
    let executor = SystemExecutor;
    let mut ctx = Context::new(actions, log, &executor, cli.dry_run);

    if !platform::is_arch_linux() {
        log.warn("this does not look like an Arch system; proceeding anyway");
    }

    let all = tasks::all_tasks();

    if wants_sudo_password(&all, &ctx) {
        ctx.set_sudo_password(prompt::sudo_password()?);
    }

    for task in &all {
        tasks::execute(task.as_ref(), &ctx);
    }

    log.print_summary();

    let failed = log.failure_count();
    if failed > 0 {
        anyhow::bail!("{failed} task(s) failed");
    }
    Ok(())
}

/// Whether this run needs the sudo password up front: at least one enabled
/// task shells out through sudo, and dry runs never prompt.
fn wants_sudo_password(all: &[Box<dyn Task>], ctx: &Context) -> bool {
    !ctx.dry_run && all.iter().any(|t| t.should_run(ctx) && t.needs_root())
}
