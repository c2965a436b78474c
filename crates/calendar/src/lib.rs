//! # doomsday-calendar
//!
//! Gregorian calendar primitives shared by the Doomsday trainer.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["is_leap_year()"] --> B["Month::days_in()"]
//!     B --> C["CalendarDate::new()"]
//!     B --> D["YearRange::sample()"]
//!     D --> C
//!     E["Weekday (0 = Sunday)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use doomsday_calendar::{CalendarDate, Month, Weekday, is_leap_year};
//!
//! assert!(is_leap_year(2024));
//! assert_eq!(Month::February.days_in(2024), 29);
//!
//! let date = CalendarDate::new(1969, 7, 20).unwrap();
//! assert_eq!(date.to_string(), "July 20, 1969");
//!
//! assert_eq!(Weekday::from_index(4).unwrap(), Weekday::Thursday);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule |
//! | `month` | Month enum, names and lengths |
//! | `weekday` | Weekday enum indexed from Sunday |
//! | `date` | Validated calendar date and display formatting |
//! | `random` | Random valid dates within a year range |
//! | `error` | Error types |

mod date;
mod error;
mod leap;
mod month;
mod random;
mod weekday;

pub use date::{CalendarDate, format_date};
pub use error::CalendarError;
pub use leap::is_leap_year;
pub use month::{Month, days_in_month};
pub use random::{DEFAULT_END_YEAR, DEFAULT_START_YEAR, YearRange, random_valid_date};
pub use weekday::Weekday;
