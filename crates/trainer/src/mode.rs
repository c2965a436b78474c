//! Trainer modes.

/// What the trainer is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Step through the lessons; no questions.
    #[default]
    Learn,
    /// Untimed questions with hints and worked solutions.
    Practice,
    /// Timed questions, answer only.
    Speed,
}

impl Mode {
    /// Returns `true` if the mode asks questions.
    pub fn is_drill(self) -> bool {
        !matches!(self, Mode::Learn)
    }

    /// Returns `true` if hints and worked solutions are shown.
    pub fn explains(self) -> bool {
        matches!(self, Mode::Practice)
    }

    /// Returns `true` if answer times are recorded.
    pub fn is_timed(self) -> bool {
        matches!(self, Mode::Speed)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Learn => "Learn",
            Mode::Practice => "Practice",
            Mode::Speed => "Speed Drill",
        }
    }
}
