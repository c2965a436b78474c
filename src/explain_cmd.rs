//! Explain and year commands: one-off worked solutions.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use doomsday_engine::{resolve_with, year_doomsday_with};

use crate::cli::{ExplainArgs, YearArgs};
use crate::convert;
use crate::output::ExplainOutput;

/// Print the weekday of a date and how to get there.
pub fn run_explain(args: ExplainArgs) -> Result<()> {
    let _cmd = info_span!("explain").entered();
    let date = convert::parse_date(&args.date)?;
    let rule = convert::parse_anchor_rule(&args.anchor_rule)?;

    let resolution = resolve_with(date, rule);
    info!(%date, weekday = %resolution.weekday(), rule = rule.name(), "resolved");

    if args.json {
        let json = serde_json::to_string_pretty(&ExplainOutput::from(&resolution))
            .context("failed to serialize solution")?;
        println!("{json}");
        return Ok(());
    }

    println!("{date} is a {}", resolution.weekday());
    println!();
    for line in resolution.solution_lines() {
        println!("  {line}");
    }
    Ok(())
}

/// Print the Odd+11 derivation for a year.
pub fn run_year(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let rule = convert::parse_anchor_rule(&args.anchor_rule)?;
    let result = year_doomsday_with(args.year, rule);
    info!(year = args.year, doomsday = %result.doomsday(), "derived");

    for (i, line) in result.trace().lines().iter().enumerate() {
        println!("{}. {line}", i + 1);
    }
    Ok(())
}
