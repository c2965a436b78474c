//! Year doomsday via the Odd+11 method.

use doomsday_calendar::Weekday;

use crate::anchor::{AnchorRule, century_of};
use crate::trace::{DerivationTrace, TraceStep};

/// Number of steps in every year-doomsday trace.
pub const TRACE_LEN: usize = 8;

/// Doomsday weekday of a year together with the steps that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoomsdayResult {
    year: i32,
    doomsday: Weekday,
    trace: DerivationTrace,
}

impl DoomsdayResult {
    /// The year the doomsday was computed for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The weekday every doomsday date of the year falls on.
    pub fn doomsday(&self) -> Weekday {
        self.doomsday
    }

    /// The derivation, one entry per step.
    pub fn trace(&self) -> &DerivationTrace {
        &self.trace
    }
}

/// Computes the doomsday of `year` using the default [`AnchorRule`].
///
/// # Examples
///
/// ```
/// use doomsday_calendar::Weekday;
/// use doomsday_engine::year_doomsday;
///
/// let result = year_doomsday(2024);
/// assert_eq!(result.doomsday(), Weekday::Thursday);
/// assert_eq!(result.trace().len(), 8);
/// ```
pub fn year_doomsday(year: i32) -> DoomsdayResult {
    year_doomsday_with(year, AnchorRule::default())
}

/// Computes the doomsday of `year` with an explicit anchor rule.
///
/// Steps:
///
/// 1. century anchor
/// 2. `yy = year mod 100`
/// 3. if `yy` is odd, add 11
/// 4. halve
/// 5. if odd, add 11
/// 6. reduce modulo 7
/// 7. subtract from the anchor, modulo 7
pub fn year_doomsday_with(year: i32, rule: AnchorRule) -> DoomsdayResult {
    let mut trace = DerivationTrace::with_capacity(TRACE_LEN);

    let anchor = rule.anchor(year);
    trace.push(TraceStep::CenturyAnchor {
        century: century_of(year),
        anchor,
    });

    // rem_euclid keeps negative years in 0..=99
    let mut value = year.rem_euclid(100) as u8;
    trace.push(TraceStep::LastTwoDigits { value });

    value = odd_plus_eleven(value, &mut trace);
    value /= 2;
    trace.push(TraceStep::Halve { result: value });
    value = odd_plus_eleven(value, &mut trace);

    let remainder = value % 7;
    trace.push(TraceStep::Remainder { value, remainder });

    let doomsday = anchor.add_days(-i64::from(remainder));
    trace.push(TraceStep::SubtractFromAnchor {
        anchor,
        remainder,
        doomsday,
    });
    trace.push(TraceStep::Doomsday { year, doomsday });

    DoomsdayResult {
        year,
        doomsday,
        trace,
    }
}

fn odd_plus_eleven(value: u8, trace: &mut DerivationTrace) -> u8 {
    if value % 2 == 1 {
        let to = value + 11;
        trace.push(TraceStep::AddEleven { from: value, to });
        to
    } else {
        trace.push(TraceStep::KeepEven { value });
        value
    }
}
