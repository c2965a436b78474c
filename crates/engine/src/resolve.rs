//! Day-of-week resolution from the year doomsday and month doomsday.

use doomsday_calendar::{CalendarDate, Weekday};

use crate::anchor::AnchorRule;
use crate::error::DoomsdayError;
use crate::month::month_doomsday_date;
use crate::year::{DoomsdayResult, year_doomsday_with};

/// Weekday of a date together with the intermediate values of the method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    date: CalendarDate,
    year: DoomsdayResult,
    month_doomsday: u8,
    raw_offset: i32,
    offset: u8,
    weekday: Weekday,
}

impl Resolution {
    /// The resolved date.
    pub fn date(&self) -> CalendarDate {
        self.date
    }

    /// Doomsday of the date's year, with its derivation.
    pub fn year(&self) -> &DoomsdayResult {
        &self.year
    }

    /// Day of the month that falls on the year's doomsday.
    pub fn month_doomsday(&self) -> u8 {
        self.month_doomsday
    }

    /// `day - month_doomsday`, may be negative.
    pub fn raw_offset(&self) -> i32 {
        self.raw_offset
    }

    /// Raw offset reduced into 0..=6.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Weekday of the date.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Short hint: the month doomsday followed by the year derivation.
    pub fn hint_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.year.trace().len() + 1);
        lines.push(format!(
            "Doomsday for {}/{}",
            self.date.month().number(),
            self.month_doomsday
        ));
        lines.extend(self.year.trace().lines());
        lines
    }

    /// Full worked solution: the year derivation followed by the month
    /// doomsday, the offset and the final count.
    pub fn solution_lines(&self) -> Vec<String> {
        let mut lines = self.year.trace().lines();
        let day = self.date.day();
        let plural = if self.offset == 1 { "" } else { "s" };
        lines.push(format!(
            "Month doomsday: {} {}",
            self.date.month(),
            self.month_doomsday
        ));
        lines.push(format!(
            "Offset from month doomsday: {day} - {} = {} days",
            self.month_doomsday, self.raw_offset
        ));
        lines.push(format!(
            "Offset mod 7: {} mod 7 = {}",
            self.raw_offset, self.offset
        ));
        lines.push(format!(
            "Final day: Start from {} and move {} day{plural} forward → {}",
            self.year.doomsday(),
            self.offset,
            self.weekday
        ));
        lines
    }
}

/// Resolves the weekday of `date` using the default [`AnchorRule`].
pub fn resolve(date: CalendarDate) -> Resolution {
    resolve_with(date, AnchorRule::default())
}

/// Resolves the weekday of `date` with an explicit anchor rule.
pub fn resolve_with(date: CalendarDate, rule: AnchorRule) -> Resolution {
    let year = year_doomsday_with(date.year(), rule);
    let month_doomsday = month_doomsday_date(date.month(), date.year());
    let raw_offset = i32::from(date.day()) - i32::from(month_doomsday);
    let offset = raw_offset.rem_euclid(7) as u8;
    let weekday = year.doomsday().add_days(i64::from(offset));
    Resolution {
        date,
        year,
        month_doomsday,
        raw_offset,
        offset,
        weekday,
    }
}

/// Weekday of `month`/`day`/`year`.
///
/// # Errors
///
/// Returns [`DoomsdayError::InvalidDate`] if `month` is not in 1..=12 or
/// `day` does not exist in that month of `year`.
///
/// # Examples
///
/// ```
/// use doomsday_calendar::Weekday;
/// use doomsday_engine::day_of_week;
///
/// assert_eq!(day_of_week(7, 20, 1969).unwrap(), Weekday::Sunday);
/// assert!(day_of_week(2, 29, 2023).is_err());
/// ```
pub fn day_of_week(month: u8, day: u8, year: i32) -> Result<Weekday, DoomsdayError> {
    let date = CalendarDate::new(year, month, day)?;
    Ok(resolve(date).weekday())
}
