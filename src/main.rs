mod cli;
mod config;
mod convert;
mod drill_cmd;
mod explain_cmd;
mod learn_cmd;
mod logging;
mod output;

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
        Command::Explain(args) => explain_cmd::run_explain(args),
        Command::Year(args) => explain_cmd::run_year(args),
        Command::Tables => learn_cmd::run_tables(),
        Command::Learn => learn_cmd::run_learn(),
        Command::Practice(args) => drill_cmd::run(args, doomsday_trainer::Mode::Practice),
        Command::Speed(args) => drill_cmd::run(args, doomsday_trainer::Mode::Speed),
    }
}
