//! Day of the week, indexed from Sunday.

use std::fmt;

use crate::error::CalendarError;

/// A day of the week.
///
/// The discriminant is the canonical index used throughout the trainer:
/// `0` is Sunday and `6` is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ABBREVIATIONS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Weekday {
    /// All weekdays in canonical order, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Creates a `Weekday` from its index (0 = Sunday).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWeekday`] if `index` is not in 0..=6.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CalendarError::InvalidWeekday { index })
    }

    /// Creates a `Weekday` from any integer, reducing it modulo 7 first.
    ///
    /// Negative values wrap around, so `-3` is Thursday.
    pub fn from_index_wrapping(value: i64) -> Self {
        Self::ALL[value.rem_euclid(7) as usize]
    }

    /// Returns the index of this weekday (0 = Sunday).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the weekday `days` after this one. Negative values move back.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_index_wrapping(i64::from(self.index()) + days)
    }

    /// Full English name, e.g. `"Thursday"`.
    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Three-letter abbreviation, e.g. `"Thu"`.
    pub fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
