//! Error types for the doomsday-engine crate.

use doomsday_calendar::CalendarError;

/// Error type for the public entry points of the doomsday-engine crate.
///
/// The algorithm itself is total; only unvalidated `(month, day, year)`
/// input can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoomsdayError {
    /// Returned when the month or day does not form a real date.
    #[error("invalid date: {0}")]
    InvalidDate(#[from] CalendarError),
}
