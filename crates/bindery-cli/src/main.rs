//! Bindery CLI: the `bindery` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            profile,
            provider,
            document,
            registry,
            json,
            quiet,
        } => commands::check::run(commands::check::Args {
            profile,
            provider,
            document,
            registry,
            json,
            quiet,
        }),
    }
}
