//! Practice and speed commands: the interactive drill loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use doomsday_calendar::Weekday;
use doomsday_trainer::{Input, Mode, Outcome, Session, Stats, TrainerError};

use crate::cli::DrillArgs;
use crate::config::DoomsdayConfig;
use crate::convert;

/// Run an interactive drill on stdin/stdout.
pub fn run(args: DrillArgs, mode: Mode) -> Result<()> {
    let _cmd = info_span!("drill", mode = mode.name()).entered();

    // 1. Load optional TOML config
    let config = match &args.config {
        Some(path) => DoomsdayConfig::load(path)?,
        None => DoomsdayConfig::default(),
    };

    // 2. Merge CLI overrides
    let drill_cfg = convert::build_drill_config(&config.drill, &args)?;
    let seed = args.seed.or(config.seed);
    info!(
        start_year = drill_cfg.range().start(),
        end_year = drill_cfg.range().end(),
        rule = drill_cfg.anchor_rule().name(),
        ?seed,
        "starting drill"
    );

    // 3. Create seeded RNG
    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut session = Session::new(mode, drill_cfg, rng).context("failed to start drill")?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(&mut session, stdin.lock(), stdout.lock())
}

/// Whether the drill loop keeps reading input.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Feeds input lines to `session` until quit, end of input or the question
/// limit, then prints the summary.
fn drive<R: Rng, B: BufRead, W: Write>(
    session: &mut Session<R>,
    input: B,
    mut out: W,
) -> Result<()> {
    writeln!(out, "{} — {}", session.mode().name(), key_help(session.mode()))?;
    print_question(&mut out, session)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let input = match line.parse::<Input>() {
            Ok(input) => input,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        if step(session, input, &mut out)? == Flow::Stop {
            break;
        }
    }

    print_summary(&mut out, session.stats(), session.mode())?;
    out.flush()?;
    Ok(())
}

fn step<R: Rng, W: Write>(session: &mut Session<R>, input: Input, out: &mut W) -> Result<Flow> {
    match input {
        Input::Quit => return Ok(Flow::Stop),
        Input::Guess(day) => match session.answer(day) {
            Ok(outcome) => {
                print_outcome(out, session, &outcome)?;
                if session.is_finished() {
                    return Ok(Flow::Stop);
                }
            }
            Err(e @ TrainerError::AlreadyAnswered { .. }) => {
                writeln!(out, "{e}; press enter for the next question")?;
            }
            Err(e) => return Err(e.into()),
        },
        Input::Hint => match session.toggle_hint() {
            Ok(true) => {
                for line in session.question().resolution().hint_lines() {
                    writeln!(out, "  {line}")?;
                }
            }
            Ok(false) => writeln!(out, "Hint hidden")?,
            Err(e) => writeln!(out, "{e}")?,
        },
        Input::Next => {
            if !session.is_answered() {
                writeln!(out, "Pick a day first (1-7)")?;
                return Ok(Flow::Continue);
            }
            session.next_question()?;
            print_question(out, session)?;
        }
    }
    Ok(Flow::Continue)
}

fn key_help(mode: Mode) -> String {
    let days: Vec<String> = Weekday::ALL
        .iter()
        .map(|d| format!("[{}] {}", d.index() + 1, d.abbreviation()))
        .collect();
    let extra = if mode.explains() {
        "h hint, enter next, q quit"
    } else {
        "enter next, q quit"
    };
    format!("{} ({extra})", days.join(" "))
}

fn print_question<R: Rng, W: Write>(out: &mut W, session: &Session<R>) -> Result<()> {
    let question = session.question();
    writeln!(out)?;
    writeln!(out, "Question {}: {}", question.number(), question.date())?;
    Ok(())
}

fn print_outcome<R: Rng, W: Write>(
    out: &mut W,
    session: &Session<R>,
    outcome: &Outcome,
) -> Result<()> {
    if outcome.is_correct() {
        write!(out, "✓ Correct!")?;
    } else {
        write!(out, "✗ The answer is {}", outcome.answer)?;
    }
    match outcome.elapsed {
        Some(t) => writeln!(out, " ({:.1}s)", t.as_secs_f64())?,
        None => writeln!(out)?,
    }

    if session.mode().explains() {
        writeln!(out, "Solution:")?;
        for line in session.question().resolution().solution_lines() {
            writeln!(out, "  {line}")?;
        }
    }

    let stats = session.stats();
    write!(
        out,
        "🔥 {} streak  ⭐ Best: {}  📊 {}/{} ({}%)",
        stats.streak(),
        stats.best_streak(),
        stats.correct(),
        stats.attempts(),
        stats.accuracy_percent()
    )?;
    if session.mode().is_timed() {
        write!(
            out,
            "  ⏱ Avg: {}s  Best: {}s  Solved: {}",
            secs_or_dash(stats.average_secs()),
            secs_or_dash(stats.best_secs()),
            stats.solved()
        )?;
    }
    writeln!(out)?;
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, stats: &Stats, mode: Mode) -> Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}/{} correct ({}%), best streak {}",
        stats.correct(),
        stats.attempts(),
        stats.accuracy_percent(),
        stats.best_streak()
    )?;
    if mode.is_timed() {
        writeln!(
            out,
            "Average {}s  Best {}s  Solved {}",
            secs_or_dash(stats.average_secs()),
            secs_or_dash(stats.best_secs()),
            stats.solved()
        )?;
    }
    Ok(())
}

fn secs_or_dash(secs: Option<f64>) -> String {
    secs.map_or_else(|| "—".to_string(), |s| format!("{s:.1}"))
}
