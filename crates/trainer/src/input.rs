//! Keys accepted during a drill.

use std::str::FromStr;

use doomsday_calendar::Weekday;

use crate::error::TrainerError;

/// One line of user input during a drill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Keys `1`-`7`, Sunday through Saturday.
    Guess(Weekday),
    /// Empty line, space or `n`.
    Next,
    /// `h`.
    Hint,
    /// `q`.
    Quit,
}

impl FromStr for Input {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "" | "n" => Ok(Input::Next),
            "h" => Ok(Input::Hint),
            "q" => Ok(Input::Quit),
            _ => match key.parse::<u8>() {
                Ok(n @ 1..=7) => Ok(Input::Guess(Weekday::from_index(n - 1)?)),
                _ => Err(TrainerError::UnrecognisedInput { input: key }),
            },
        }
    }
}
