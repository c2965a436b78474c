//! Century anchors.
//!
//! The anchor of a century is the weekday of the doomsday in its `00` year.
//! The pattern repeats every 400 years: Tuesday, Sunday, Friday, Wednesday.

use doomsday_calendar::Weekday;
use tracing::debug;

/// Published anchor table for the centuries 1700 through 2300.
pub const CENTURY_ANCHORS: [(i32, Weekday); 7] = [
    (1700, Weekday::Sunday),
    (1800, Weekday::Friday),
    (1900, Weekday::Wednesday),
    (2000, Weekday::Tuesday),
    (2100, Weekday::Sunday),
    (2200, Weekday::Friday),
    (2300, Weekday::Wednesday),
];

/// Anchor used by [`tabulated_century_anchor`] for centuries missing from
/// [`CENTURY_ANCHORS`] (the 2000s entry).
///
/// Only correct for centuries congruent to 2000 modulo 400 (1600, 2400, ...).
pub const FALLBACK_ANCHOR: Weekday = Weekday::Tuesday;

/// Returns the first year of the century containing `year`, e.g. 1900 for 1969.
///
/// Uses floor division, so year -1 belongs to century -100.
pub fn century_of(year: i32) -> i32 {
    year.div_euclid(100) * 100
}

/// Century anchor from the exhaustive 400-year rule.
///
/// With `c = floor(year / 100)` the anchor is `(2 + 5 * (c mod 4)) mod 7`.
/// Agrees with [`CENTURY_ANCHORS`] on every tabulated century.
///
/// # Examples
///
/// ```
/// use doomsday_calendar::Weekday;
/// use doomsday_engine::century_anchor;
///
/// assert_eq!(century_anchor(1776), Weekday::Sunday);
/// assert_eq!(century_anchor(2050), Weekday::Tuesday);
/// ```
pub fn century_anchor(year: i32) -> Weekday {
    let c = i64::from(year.div_euclid(100));
    Weekday::from_index_wrapping(2 + 5 * c.rem_euclid(4))
}

/// Century anchor looked up in [`CENTURY_ANCHORS`].
///
/// Centuries outside 1700..=2300 fall back to [`FALLBACK_ANCHOR`]. This is
/// right for 1600 and 2400 but wrong for, e.g., 1500 (really Wednesday).
pub fn tabulated_century_anchor(year: i32) -> Weekday {
    let century = century_of(year);
    match CENTURY_ANCHORS.iter().find(|(c, _)| *c == century) {
        Some(&(_, anchor)) => anchor,
        None => {
            debug!(century, "century not in anchor table, using 2000s anchor");
            FALLBACK_ANCHOR
        }
    }
}

/// Strategy used to find a century anchor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnchorRule {
    /// Exhaustive 400-year rule, valid for every century.
    #[default]
    Periodic,
    /// Published 1700–2300 table with the Tuesday fallback.
    Table,
}

impl AnchorRule {
    /// Returns the anchor weekday for the century containing `year`.
    pub fn anchor(self, year: i32) -> Weekday {
        match self {
            AnchorRule::Periodic => century_anchor(year),
            AnchorRule::Table => tabulated_century_anchor(year),
        }
    }

    /// Lower-case name as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            AnchorRule::Periodic => "periodic",
            AnchorRule::Table => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn century_of_floors() {
        assert_eq!(century_of(1969), 1900);
        assert_eq!(century_of(2000), 2000);
        assert_eq!(century_of(2099), 2000);
        assert_eq!(century_of(0), 0);
        assert_eq!(century_of(-1), -100);
    }

    #[test]
    fn periodic_matches_table() {
        for (century, anchor) in CENTURY_ANCHORS {
            assert_eq!(century_anchor(century), anchor, "century {century}");
        }
    }

    #[test]
    fn table_lookup() {
        assert_eq!(tabulated_century_anchor(1776), Weekday::Sunday);
        assert_eq!(tabulated_century_anchor(1969), Weekday::Wednesday);
        assert_eq!(tabulated_century_anchor(2050), Weekday::Tuesday);
        assert_eq!(tabulated_century_anchor(2399), Weekday::Wednesday);
    }

    #[test]
    fn table_fallback_is_right_on_the_400_year_cycle() {
        assert_eq!(tabulated_century_anchor(1600), century_anchor(1600));
        assert_eq!(tabulated_century_anchor(2400), century_anchor(2400));
    }

    #[test]
    fn table_fallback_is_wrong_elsewhere() {
        // Known gap: the 1500s anchor is Wednesday, the table says Tuesday.
        assert_eq!(century_anchor(1500), Weekday::Wednesday);
        assert_eq!(tabulated_century_anchor(1500), Weekday::Tuesday);
        assert_ne!(tabulated_century_anchor(2500), century_anchor(2500));
    }

    #[test]
    fn periodic_cycle() {
        assert_eq!(century_anchor(1600), Weekday::Tuesday);
        assert_eq!(century_anchor(1500), Weekday::Wednesday);
        assert_eq!(century_anchor(0), Weekday::Tuesday);
        assert_eq!(century_anchor(-100), Weekday::Wednesday);
    }

    #[test]
    fn rule_dispatch() {
        assert_eq!(AnchorRule::default(), AnchorRule::Periodic);
        assert_eq!(AnchorRule::Periodic.anchor(1500), Weekday::Wednesday);
        assert_eq!(AnchorRule::Table.anchor(1500), Weekday::Tuesday);
        assert_eq!(AnchorRule::Table.name(), "table");
    }
}
