//! Month doomsday dates.

use doomsday_calendar::{Month, is_leap_year};

/// A date in a month that always falls on the year's doomsday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDoomsday {
    /// The month.
    pub month: Month,
    /// Day of the month in a common year.
    pub day: u8,
    /// Memory aid shown in lessons.
    pub mnemonic: &'static str,
}

/// Doomsday dates for a common year, January first.
///
/// January and February move to the 4th and 29th in leap years; use
/// [`month_doomsday_date`] rather than reading `day` directly.
pub const MONTH_DOOMSDAYS: [MonthDoomsday; 12] = [
    MonthDoomsday {
        month: Month::January,
        day: 3,
        mnemonic: "1/3 (or 1/4 in leap year)",
    },
    MonthDoomsday {
        month: Month::February,
        day: 28,
        mnemonic: "2/28 (or 2/29 in leap year)",
    },
    MonthDoomsday {
        month: Month::March,
        day: 14,
        mnemonic: "3/14 (Pi Day)",
    },
    MonthDoomsday {
        month: Month::April,
        day: 4,
        mnemonic: "4/4",
    },
    MonthDoomsday {
        month: Month::May,
        day: 9,
        mnemonic: "5/9 (I work 9-5 at 7-11)",
    },
    MonthDoomsday {
        month: Month::June,
        day: 6,
        mnemonic: "6/6",
    },
    MonthDoomsday {
        month: Month::July,
        day: 11,
        mnemonic: "7/11 (I work 9-5 at 7-11)",
    },
    MonthDoomsday {
        month: Month::August,
        day: 8,
        mnemonic: "8/8",
    },
    MonthDoomsday {
        month: Month::September,
        day: 5,
        mnemonic: "9/5 (I work 9-5 at 7-11)",
    },
    MonthDoomsday {
        month: Month::October,
        day: 10,
        mnemonic: "10/10",
    },
    MonthDoomsday {
        month: Month::November,
        day: 7,
        mnemonic: "11/7 (I work 9-5 at 7-11)",
    },
    MonthDoomsday {
        month: Month::December,
        day: 12,
        mnemonic: "12/12",
    },
];

/// Returns the table entry for `month`.
pub fn month_doomsday(month: Month) -> &'static MonthDoomsday {
    &MONTH_DOOMSDAYS[month.index()]
}

/// Day of `month` in `year` that falls on the year's doomsday.
///
/// # Examples
///
/// ```
/// use doomsday_calendar::Month;
/// use doomsday_engine::month_doomsday_date;
///
/// assert_eq!(month_doomsday_date(Month::February, 2024), 29);
/// assert_eq!(month_doomsday_date(Month::February, 2023), 28);
/// ```
pub fn month_doomsday_date(month: Month, year: i32) -> u8 {
    let leap = is_leap_year(year);
    match month {
        Month::January if leap => 4,
        Month::February if leap => 29,
        _ => month_doomsday(month).day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_month_order() {
        for (i, entry) in MONTH_DOOMSDAYS.iter().enumerate() {
            assert_eq!(entry.month.index(), i);
        }
    }

    #[test]
    fn leap_adjusted_months() {
        assert_eq!(month_doomsday_date(Month::January, 2023), 3);
        assert_eq!(month_doomsday_date(Month::January, 2024), 4);
        assert_eq!(month_doomsday_date(Month::February, 2023), 28);
        assert_eq!(month_doomsday_date(Month::February, 2024), 29);
        assert_eq!(month_doomsday_date(Month::February, 1900), 28);
        assert_eq!(month_doomsday_date(Month::February, 2000), 29);
    }

    #[test]
    fn fixed_months_ignore_leap_years() {
        for year in [2023, 2024] {
            assert_eq!(month_doomsday_date(Month::March, year), 14);
            assert_eq!(month_doomsday_date(Month::July, year), 11);
            assert_eq!(month_doomsday_date(Month::December, year), 12);
        }
    }

    #[test]
    fn dates_fit_in_their_month() {
        for entry in MONTH_DOOMSDAYS {
            for year in [2023, 2024] {
                assert!(month_doomsday_date(entry.month, year) <= entry.month.days_in(year));
            }
        }
    }

    #[test]
    fn mnemonics() {
        assert_eq!(month_doomsday(Month::March).mnemonic, "3/14 (Pi Day)");
        assert_eq!(
            month_doomsday(Month::September).mnemonic,
            "9/5 (I work 9-5 at 7-11)"
        );
    }
}
