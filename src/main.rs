use std::io;
use std::process::exit;

use clap::{CommandFactory as _, Parser as _};

use arch_setup::cli::Cli;
use arch_setup::{commands, logging};

fn main() {
    let args = Cli::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Cli::command(), "arch-setup", &mut io::stdout());
        return;
    }

    logging::init(args.verbose);
    let log = logging::Logger::new();

    if let Err(error) = commands::run(&args, &log) {
        tracing::error!("{error:#}");
        exit(1);
    }
}
