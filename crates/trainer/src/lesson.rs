//! Lesson pages for learn mode.

use doomsday_calendar::{CalendarDate, Month};
use doomsday_engine::{CENTURY_ANCHORS, MONTH_DOOMSDAYS, resolve, year_doomsday};

/// Number of lesson pages.
pub const LESSON_COUNT: usize = 4;

/// One page of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// Page heading.
    pub title: String,
    /// Body text, one paragraph or list item per line.
    pub lines: Vec<String>,
}

/// Builds the four lesson pages from the engine's tables and worked examples.
pub fn lessons() -> [Lesson; LESSON_COUNT] {
    [
        century_anchors(),
        odd_plus_eleven(),
        doomsday_dates(),
        putting_it_together(),
    ]
}

fn century_anchors() -> Lesson {
    let mut lines = vec![
        "Each century has an \"anchor\" day that all Doomsdays in that century are based on:"
            .to_string(),
    ];
    lines.extend(
        CENTURY_ANCHORS
            .iter()
            .map(|(century, day)| format!("  {century}s  {day}")),
    );
    lines.push(
        "Mnemonic: \"We-in-dis-day\" → Wed (1900s), Tue (2000s), Sun (2100s)".to_string(),
    );
    Lesson {
        title: "Step 1: Century Anchors".to_string(),
        lines,
    }
}

fn odd_plus_eleven() -> Lesson {
    let example = year_doomsday(2024);
    let mut lines: Vec<String> = [
        "To find which day Doomsday falls on for any year:",
        "  1. Take the last two digits of the year",
        "  2. If odd, add 11",
        "  3. Divide by 2",
        "  4. If odd, add 11",
        "  5. Find remainder when divided by 7",
        "  6. Subtract from century anchor (mod 7)",
        "Example: 2024",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    lines.extend(example.trace().lines().into_iter().map(|l| format!("  {l}")));
    lines.push(format!("Doomsday 2024 is {}!", example.doomsday()));
    Lesson {
        title: "Step 2: The Odd+11 Method".to_string(),
        lines,
    }
}

fn doomsday_dates() -> Lesson {
    let mut lines =
        vec!["These dates ALWAYS fall on Doomsday (the same day of the week):".to_string()];
    lines.extend(MONTH_DOOMSDAYS.iter().map(|entry| {
        let date = format!("{}/{}", entry.month.number(), entry.day);
        format!("  {date:<6} {}", entry.mnemonic)
    }));
    lines.push(
        "Tip: \"I work 9-5 at 7-11\" helps remember May 9, Sept 5, July 11, Nov 7".to_string(),
    );
    Lesson {
        title: "Step 3: Doomsday Dates".to_string(),
        lines,
    }
}

fn putting_it_together() -> Lesson {
    let date = CalendarDate::from_parts(1969, Month::July, 20).expect("July has 31 days");
    let example = resolve(date);
    let mut lines: Vec<String> = [
        "To find the day of week for any date:",
        "  1. Find the Doomsday for that year (Odd+11)",
        "  2. Find the nearest Doomsday date in that month",
        "  3. Count forward/backward from that Doomsday",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    lines.push(format!("Example: {date}"));
    lines.push(format!("  Doomsday 1969: {}", example.year().doomsday()));
    lines.push(format!("  July's Doomsday: 7/{}", example.month_doomsday()));
    lines.push(format!(
        "  July 20 - July {} = {} days",
        example.month_doomsday(),
        example.raw_offset()
    ));
    lines.push(format!(
        "  {} + {} = {} + {} = {}",
        example.year().doomsday(),
        example.raw_offset(),
        example.year().doomsday(),
        example.offset(),
        example.weekday()
    ));
    lines.push(format!("Moon landing was on a {}!", example.weekday()));
    Lesson {
        title: "Step 4: Putting It Together".to_string(),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_pages_in_order() {
        let pages = lessons();
        assert_eq!(pages.len(), LESSON_COUNT);
        assert!(pages[0].title.starts_with("Step 1"));
        assert!(pages[3].title.starts_with("Step 4"));
        assert!(pages.iter().all(|p| !p.lines.is_empty()));
    }

    #[test]
    fn anchor_page_lists_every_century() {
        let page = &lessons()[0];
        assert!(page.lines.iter().any(|l| l.contains("1900s  Wednesday")));
        assert!(page.lines.iter().any(|l| l.contains("2300s  Wednesday")));
    }

    #[test]
    fn method_page_ends_with_thursday() {
        let page = &lessons()[1];
        assert_eq!(page.lines.last().unwrap(), "Doomsday 2024 is Thursday!");
    }

    #[test]
    fn dates_page_has_mnemonics() {
        let page = &lessons()[2];
        assert!(page.lines.iter().any(|l| l.contains("3/14") && l.contains("Pi Day")));
    }

    #[test]
    fn worked_example() {
        let page = &lessons()[3];
        assert!(page.lines.contains(&"  Friday + 9 = Friday + 2 = Sunday".to_string()));
        assert_eq!(page.lines.last().unwrap(), "Moon landing was on a Sunday!");
    }
}
