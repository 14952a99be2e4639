use clap::{ArgGroup, Parser};
use clap_complete::Shell;

/// Top-level CLI entry point for the provisioning tool.
///
/// Every provisioning action is an independent boolean switch; at least one
/// must be given. `--all` turns on every action at once.
#[derive(Parser, Debug)]
#[command(
    name = "arch-setup",
    about = "Arch Linux workstation provisioning tool",
    version,
    group = ArgGroup::new("actions").multiple(true).required(true)
)]
pub struct Cli {
    /// Refresh the Arch keyring before anything else touches pacman
    #[arg(long, group = "actions")]
    pub keyring: bool,

    /// Upgrade installed system packages
    #[arg(long, group = "actions")]
    pub system_upgrade: bool,

    /// Install the pacman package set
    #[arg(long, group = "actions")]
    pub pacman_pkgs: bool,

    /// Install the Flatpak application set from flathub
    #[arg(long, group = "actions")]
    pub flatpak_apps: bool,

    /// Install the AUR package set via paru
    #[arg(long, group = "actions")]
    pub paru_pkgs: bool,

    /// Rebuild the manual-page database
    #[arg(long, group = "actions")]
    pub update_mandb: bool,

    /// Run every action
    #[arg(long, group = "actions")]
    pub all: bool,

    /// Preview the commands without running them
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", group = "actions", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Action switches resolved from the command line, with `--all` applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actions {
    pub keyring: bool,
    pub system_upgrade: bool,
    pub pacman_pkgs: bool,
    pub flatpak_apps: bool,
    pub paru_pkgs: bool,
    pub update_mandb: bool,
}

impl Actions {
    /// Resolve the enabled actions from parsed CLI flags.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            keyring: cli.all || cli.keyring,
            system_upgrade: cli.all || cli.system_upgrade,
            pacman_pkgs: cli.all || cli.pacman_pkgs,
            flatpak_apps: cli.all || cli.flatpak_apps,
            paru_pkgs: cli.all || cli.paru_pkgs,
            update_mandb: cli.all || cli.update_mandb,
        }
    }

    /// Actions with every switch off (useful as a test base).
    #[must_use]
    pub const fn none() -> Self {
        Self {
            keyring: false,
            system_upgrade: false,
            pacman_pkgs: false,
            flatpak_apps: false,
            paru_pkgs: false,
            update_mandb: false,
        }
    }
}
