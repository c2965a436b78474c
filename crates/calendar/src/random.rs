//! Random valid dates for drill questions.

use rand::Rng;

use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::month::Month;

/// First year drawn by [`YearRange::default`].
pub const DEFAULT_START_YEAR: i32 = 1900;

/// Last year drawn by [`YearRange::default`].
pub const DEFAULT_END_YEAR: i32 = 2100;

/// An inclusive, non-empty range of years to draw dates from.
///
/// # Example
///
/// ```
/// use doomsday_calendar::YearRange;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let range = YearRange::new(2000, 2000).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(range.sample(&mut rng).year(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: i32,
    end: i32,
}

impl YearRange {
    /// Creates a new range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearRange`] if `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first year of the range.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Returns the last year of the range.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Returns `true` if `year` lies within the range.
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Draws a date: year uniform over the range, month uniform over 1..=12,
    /// then day uniform over the days of that month in that year.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CalendarDate {
        let year = rng.random_range(self.start..=self.end);
        let month = Month::ALL[rng.random_range(0..Month::ALL.len())];
        let day = rng.random_range(1..=month.days_in(year));
        CalendarDate::from_checked_parts(year, month, day)
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
        }
    }
}

/// Draws a uniformly random valid date with a year in `start_year..=end_year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYearRange`] if `start_year > end_year`.
pub fn random_valid_date<R: Rng + ?Sized>(
    start_year: i32,
    end_year: i32,
    rng: &mut R,
) -> Result<CalendarDate, CalendarError> {
    Ok(YearRange::new(start_year, end_year)?.sample(rng))
}
