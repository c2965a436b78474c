use chrono::NaiveDate;
use doomsday_calendar::{CalendarDate, CalendarError, Month, days_in_month, is_leap_year};

/// Length of a month according to chrono, used as an independent reference.
fn chrono_month_len(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next - first).num_days() as u32
}

#[test]
fn month_lengths_match_chrono() {
    for year in 1590..=2410 {
        for m in 1..=12u8 {
            assert_eq!(
                u32::from(days_in_month(m, year).unwrap()),
                chrono_month_len(year, u32::from(m)),
                "length mismatch for {year}-{m:02}"
            );
        }
    }
}

#[test]
fn leap_rule_matches_chrono() {
    for year in -400..=2800 {
        let chrono_leap = NaiveDate::from_ymd_opt(year, 2, 29).is_some();
        assert_eq!(is_leap_year(year), chrono_leap, "leap mismatch for {year}");
    }
}

#[test]
fn leap_rule_boundary_cases() {
    let cases: &[(i32, bool)] = &[
        (1900, false),
        (2000, true),
        (2024, true),
        (2023, false),
        (2100, false),
    ];
    for &(year, expected) in cases {
        assert_eq!(is_leap_year(year), expected, "is_leap_year({year})");
    }
}

#[test]
fn every_valid_day_accepted() {
    for month in Month::ALL {
        for day in 1..=month.days_in(2024) {
            assert!(
                CalendarDate::from_parts(2024, month, day).is_ok(),
                "{month} {day}, 2024 should be valid"
            );
        }
    }
}

#[test]
fn day_past_month_end_rejected() {
    let cases: &[(u8, u8, i32, u8)] = &[
        (2, 29, 2023, 28),
        (2, 30, 2024, 29),
        (4, 31, 2024, 30),
        (12, 32, 2024, 31),
    ];
    for &(month, day, year, max_day) in cases {
        assert_eq!(
            CalendarDate::new(year, month, day).unwrap_err(),
            CalendarError::InvalidDay {
                day,
                month,
                year,
                max_day,
            }
        );
    }
}
