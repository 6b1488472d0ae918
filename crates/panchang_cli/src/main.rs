mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Varjyam(args) => commands::varjyam(args),
        Command::Daily(args) => commands::daily(args),
        Command::Geodetic(args) => commands::geodetic(args),
        Command::Ecef(args) => commands::ecef(args),
        Command::Enu(args) => commands::enu(args),
    }
}
