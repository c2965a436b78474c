//! # doomsday-engine
//!
//! The Doomsday algorithm for finding the weekday of any Gregorian date.
//!
//! ## Pipeline
//!
//! ```text
//! year ──▶ century_anchor() ──▶ year_doomsday() (Odd+11, traced)
//!                                      │
//! month ─▶ month_doomsday_date() ──────┤
//!                                      ▼
//! day ─────────────────────────▶ resolve() ──▶ Weekday
//! ```
//!
//! Every step is a pure function; the derivation trace is returned as part
//! of [`DoomsdayResult`] rather than collected on the side.
//!
//! ## Quick start
//!
//! ```
//! use doomsday_calendar::{CalendarDate, Weekday};
//! use doomsday_engine::{day_of_week, resolve, year_doomsday};
//!
//! assert_eq!(year_doomsday(2024).doomsday(), Weekday::Thursday);
//! assert_eq!(day_of_week(7, 20, 1969).unwrap(), Weekday::Sunday);
//!
//! let resolution = resolve(CalendarDate::new(1969, 7, 20).unwrap());
//! assert_eq!(resolution.offset(), 2);
//! for line in resolution.solution_lines() {
//!     println!("{line}");
//! }
//! ```
//!
//! ## Century anchors
//!
//! [`century_anchor`] uses the 400-year rule and is valid for any year.
//! [`tabulated_century_anchor`] reproduces the 1700–2300 table with a
//! Tuesday fallback, selectable through [`AnchorRule::Table`].

mod anchor;
mod error;
mod month;
mod resolve;
mod trace;
mod year;

pub use anchor::{
    AnchorRule, CENTURY_ANCHORS, FALLBACK_ANCHOR, century_anchor, century_of,
    tabulated_century_anchor,
};
pub use error::DoomsdayError;
pub use month::{MONTH_DOOMSDAYS, MonthDoomsday, month_doomsday, month_doomsday_date};
pub use resolve::{Resolution, day_of_week, resolve, resolve_with};
pub use trace::{DerivationTrace, TraceStep};
pub use year::{DoomsdayResult, TRACE_LEN, year_doomsday, year_doomsday_with};
