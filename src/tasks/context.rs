use anyhow::{Result, bail};

use crate::cli::Actions;
use crate::exec::Executor;
use crate::logging::Logger;

/// Shared state for task execution.
pub struct Context<'a> {
    /// Actions enabled on the command line.
    pub actions: Actions,
    /// Logger for output and task recording.
    pub log: &'a Logger,
    /// Command executor (real system calls or a test double).
    pub executor: &'a dyn Executor,
    /// Preview commands without running them.
    pub dry_run: bool,
    sudo_password: Option<String>,
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("actions", &self.actions)
            .field("log", &"<Logger>")
            .field("executor", &"<dyn Executor>")
            .field("dry_run", &self.dry_run)
            .field("sudo_password", &"<redacted>")
            .finish()
    }
}

impl<'a> Context<'a> {
    /// Create a context with no sudo password attached.
    #[must_use]
    pub fn new(
        actions: Actions,
        log: &'a Logger,
        executor: &'a dyn Executor,
        dry_run: bool,
    ) -> Self {
        Self {
            actions,
            log,
            executor,
            dry_run,
            sudo_password: None,
        }
    }

    /// Attach the captured sudo password.
    pub fn set_sudo_password(&mut self, password: String) {
        self.sudo_password = Some(password);
    }

    /// The captured sudo password.
    ///
    /// # Errors
    ///
    /// Returns an error if no password was captured for this run.
    pub fn sudo_password(&self) -> Result<&str> {
        match &self.sudo_password {
            Some(password) => Ok(password),
            None => bail!("no sudo password captured"),
        }
    }
}
