//! Validated Gregorian calendar date.

use std::fmt;

use crate::error::CalendarError;
use crate::month::Month;

/// A date in the proleptic Gregorian calendar.
///
/// The day is always valid for the month and year, including February 29
/// in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: Month,
    day: u8,
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from year, month number and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for that
    /// month of `year`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_parts(year, Month::from_number(month)?, day)
    }

    /// Creates a new `CalendarDate` from an already-validated [`Month`].
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` is not valid for
    /// `month` of `year`.
    pub fn from_parts(year: i32, month: Month, day: u8) -> Result<Self, CalendarError> {
        let max_day = month.days_in(year);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.number(),
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date whose day is already known to lie within the month.
    pub(crate) fn from_checked_parts(year: i32, month: Month, day: u8) -> Self {
        debug_assert!((1..=month.days_in(year)).contains(&day));
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// ISO 8601 form, e.g. `"1969-07-20"`.
    ///
    /// The year has at least four digits. Negative years carry a `-` and
    /// years past 9999 a `+`, as in `"-0044-03-15"`.
    pub fn iso(self) -> String {
        let year = if self.year < 0 {
            format!("-{:04}", self.year.unsigned_abs())
        } else if self.year > 9999 {
            format!("+{}", self.year)
        } else {
            format!("{:04}", self.year)
        };
        format!("{year}-{:02}-{:02}", self.month.number(), self.day)
    }
}

/// Formats as `"{Month} {day}, {year}"`, e.g. `"July 20, 1969"`.
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month.name(), self.day, self.year)
    }
}

/// Formats a date given as loose parts, e.g. `format_date(7, 20, 1969)`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the parts do not form a valid date.
pub fn format_date(month: u8, day: u8, year: i32) -> Result<String, CalendarError> {
    Ok(CalendarDate::new(year, month, day)?.to_string())
}
