//! Calendar months and their lengths.

use std::fmt;

use crate::error::CalendarError;
use crate::leap::is_leap_year;

/// A month of the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const DAYS_PER_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

const NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Creates a `Month` from its number (1 = January).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn from_number(month: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self::ALL[(month - 1) as usize])
    }

    /// Returns the month number (1..=12).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the 0-based index suitable for array indexing (0..=11).
    pub fn index(self) -> usize {
        (self as usize) - 1
    }

    /// Full English name, e.g. `"July"`.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// Number of days in this month for the given year.
    ///
    /// February has 29 days in leap years.
    pub fn days_in(self, year: i32) -> u8 {
        if self == Month::February && is_leap_year(year) {
            29
        } else {
            DAYS_PER_MONTH[self.index()]
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of days in `month` (1..=12) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    Ok(Month::from_number(month)?.days_in(year))
}
