//! Derivation trace of the Odd+11 method.

use std::fmt;

use doomsday_calendar::Weekday;

/// One step of a year-doomsday derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep {
    /// Anchor weekday of the century.
    CenturyAnchor { century: i32, anchor: Weekday },
    /// The year modulo 100.
    LastTwoDigits { value: u8 },
    /// An odd value had 11 added to it.
    AddEleven { from: u8, to: u8 },
    /// An even value was kept as is.
    KeepEven { value: u8 },
    /// The value was halved.
    Halve { result: u8 },
    /// The value reduced modulo 7.
    Remainder { value: u8, remainder: u8 },
    /// The remainder subtracted from the anchor, normalised into 0..=6.
    SubtractFromAnchor {
        anchor: Weekday,
        remainder: u8,
        doomsday: Weekday,
    },
    /// Final doomsday weekday of the year.
    Doomsday { year: i32, doomsday: Weekday },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TraceStep::CenturyAnchor { century, anchor } => write!(
                f,
                "Century anchor for {century}s: {anchor} ({})",
                anchor.index()
            ),
            TraceStep::LastTwoDigits { value } => write!(f, "Last two digits: {value}"),
            TraceStep::AddEleven { from, to } => write!(f, "{from} is odd, add 11: {to}"),
            TraceStep::KeepEven { value } => write!(f, "{value} is even, keep it: {value}"),
            TraceStep::Halve { result } => write!(f, "Divide by 2: {result}"),
            TraceStep::Remainder { value, remainder } => {
                write!(f, "{value} mod 7 = {remainder}")
            }
            TraceStep::SubtractFromAnchor {
                anchor,
                remainder,
                doomsday,
            } => write!(
                f,
                "Subtract from anchor: ({} - {remainder} + 7) mod 7 = {}",
                anchor.index(),
                doomsday.index()
            ),
            TraceStep::Doomsday { year, doomsday } => {
                write!(f, "Doomsday for {year}: {doomsday}")
            }
        }
    }
}

/// Ordered, append-only record of the steps taken by a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivationTrace {
    steps: Vec<TraceStep>,
}

impl DerivationTrace {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    /// Returns the steps in the order they were taken.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// Renders each step as a human-readable line.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a DerivationTrace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
