//! Error types for the doomsday-calendar crate.

/// Error type for all fallible operations in the doomsday-calendar crate.
///
/// Covers validation failures for month numbers, day-within-month values
/// (leap-aware), weekday indices and year ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is zero or exceeds the length of the month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a weekday index is outside 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6)")]
    InvalidWeekday {
        /// The invalid index.
        index: u8,
    },

    /// Returned when a year range is empty.
    #[error("invalid year range: {start}..={end} (start must not exceed end)")]
    InvalidYearRange {
        /// First year of the range.
        start: i32,
        /// Last year of the range.
        end: i32,
    },
}
