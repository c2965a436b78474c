//! Pure conversion functions: TOML config structs and CLI strings -> crate API types.

use anyhow::{Context, Result, bail};

use doomsday_calendar::{CalendarDate, YearRange};
use doomsday_engine::AnchorRule;
use doomsday_trainer::DrillConfig;

use crate::cli::DrillArgs;
use crate::config::DrillToml;

/// Parses an anchor rule name into the corresponding enum variant.
pub fn parse_anchor_rule(s: &str) -> Result<AnchorRule> {
    match s.to_lowercase().as_str() {
        "periodic" => Ok(AnchorRule::Periodic),
        "table" => Ok(AnchorRule::Table),
        other => bail!("unknown anchor rule: {other:?} (expected \"periodic\" or \"table\")"),
    }
}

/// Parses a `YYYY-MM-DD` date. A leading `-` marks a year before 1 BC.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    let (negative, rest) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        bail!("expected a date as YYYY-MM-DD, got {s:?}");
    };
    let year: i32 = year
        .parse()
        .with_context(|| format!("invalid year in {s:?}"))?;
    let month: u8 = month
        .parse()
        .with_context(|| format!("invalid month in {s:?}"))?;
    let day: u8 = day
        .parse()
        .with_context(|| format!("invalid day in {s:?}"))?;
    let year = if negative { -year } else { year };
    Ok(CalendarDate::new(year, month, day)?)
}

/// Builds a drill configuration from TOML, with CLI overrides applied.
pub fn build_drill_config(toml: &DrillToml, args: &DrillArgs) -> Result<DrillConfig> {
    let start = args.start_year.unwrap_or(toml.start_year);
    let end = args.end_year.unwrap_or(toml.end_year);
    let range = YearRange::new(start, end)?;
    let anchor_rule = parse_anchor_rule(&toml.anchor_rule)?;
    let config = DrillConfig::new()
        .with_range(range)
        .with_anchor_rule(anchor_rule)
        .with_question_limit(args.questions.or(toml.questions));
    config.validate()?;
    Ok(config)
}
