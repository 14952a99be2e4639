//! Interactive prompts.
use anyhow::{Context as _, Result};
use dialoguer::Password;

/// Prompt for the sudo password on the controlling terminal.
///
/// The password is captured once per run and handed to every privileged
/// shell-out; it is never echoed or persisted.
///
/// # Errors
///
/// Returns an error if the prompt cannot be displayed or input is aborted.
pub fn sudo_password() -> Result<String> {
    Password::new()
        .with_prompt("[sudo] password")
        .interact()
        .context("reading sudo password")
}
