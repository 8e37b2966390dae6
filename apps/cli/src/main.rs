//! docbrowser CLI — browse the API-wrapper documentation from the shell.
//!
//! Prints the navigation tree, runs the same live filter the TUI uses, and
//! renders individual pages.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
