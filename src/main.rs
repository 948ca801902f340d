//! Command-line entry point.
//!
//! Parses arguments, initializes logging, and dispatches to the command
//! handlers in [`cli`].

mod cli;

use clap::Parser as _;

fn main() -> anyhow::Result<()> {
    tmdb_insights::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)
}
