//! Learn and tables commands: static reference material.

use anyhow::Result;

use doomsday_engine::{CENTURY_ANCHORS, MONTH_DOOMSDAYS};
use doomsday_trainer::{LESSON_COUNT, lessons};

/// Print every lesson page.
pub fn run_learn() -> Result<()> {
    for (i, lesson) in lessons().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("[{} / {LESSON_COUNT}] {}", i + 1, lesson.title);
        for line in &lesson.lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Print the century anchor and month doomsday tables.
pub fn run_tables() -> Result<()> {
    println!("Century anchors");
    for (century, anchor) in CENTURY_ANCHORS {
        println!("  {century}s  {anchor} ({})", anchor.index());
    }
    println!();
    println!("Month doomsdays");
    for entry in MONTH_DOOMSDAYS {
        println!("  {:<10} {}", entry.month.name(), entry.mnemonic);
    }
    Ok(())
}
