//! Error types for the doomsday-trainer crate.

use doomsday_calendar::CalendarError;

/// Error type for all fallible operations in the doomsday-trainer crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainerError {
    /// Returned when answering or hinting while in learn mode.
    #[error("learn mode has no questions")]
    LearnMode,

    /// Returned when the current question was already scored.
    #[error("question {number} has already been answered")]
    AlreadyAnswered {
        /// 1-based number of the question.
        number: usize,
    },

    /// Returned when a hint is requested outside an unanswered practice question.
    #[error("hints are only available in practice mode before answering")]
    HintUnavailable,

    /// Returned when asking for a question beyond the configured limit.
    #[error("drill finished after {limit} questions")]
    Finished {
        /// The configured question limit.
        limit: usize,
    },

    /// Returned when a line of user input is not a known key.
    #[error("unrecognised input {input:?} (expected 1-7, enter, h or q)")]
    UnrecognisedInput {
        /// The offending input, trimmed.
        input: String,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
