//! Gregorian leap-year rule.

/// Returns `true` if `year` is a leap year in the proleptic Gregorian
/// calendar.
///
/// A year is a leap year if it is divisible by 4 and not by 100, or if it is
/// divisible by 400. Defined for every integer, including year 0 and
/// negative (astronomical) years.
///
/// # Examples
///
/// ```
/// use doomsday_calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
