use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Doomsday algorithm trainer.
#[derive(Parser)]
#[command(
    name = "doomsday",
    version,
    about = "Learn and drill the Doomsday day-of-week algorithm"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the weekday of a date with a worked solution.
    Explain(ExplainArgs),
    /// Show the Odd+11 derivation of a year's doomsday.
    Year(YearArgs),
    /// Print the century anchor and month doomsday tables.
    Tables,
    /// Walk through the four lessons.
    Learn,
    /// Untimed drill with hints and worked solutions.
    Practice(DrillArgs),
    /// Timed drill.
    Speed(DrillArgs),
}

/// Arguments for the `explain` subcommand.
#[derive(clap::Args)]
pub struct ExplainArgs {
    /// Date as YYYY-MM-DD.
    #[arg(allow_hyphen_values = true)]
    pub date: String,

    /// Century anchor rule: "periodic" or "table".
    #[arg(long, default_value = "periodic")]
    pub anchor_rule: String,

    /// Print the solution as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Year to derive the doomsday of.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,

    /// Century anchor rule: "periodic" or "table".
    #[arg(long, default_value = "periodic")]
    pub anchor_rule: String,
}

/// Arguments for the `practice` and `speed` subcommands.
#[derive(clap::Args)]
pub struct DrillArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override first year questions are drawn from.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Override last year questions are drawn from.
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Override the number of questions.
    #[arg(short, long)]
    pub questions: Option<usize>,
}
