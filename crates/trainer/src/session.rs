//! Drill session state.

use std::time::{Duration, Instant};

use doomsday_calendar::{CalendarDate, Weekday};
use doomsday_engine::{Resolution, resolve_with};
use rand::Rng;
use tracing::debug;

use crate::config::DrillConfig;
use crate::error::TrainerError;
use crate::mode::Mode;
use crate::stats::Stats;

/// A drill question and its worked answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    number: usize,
    resolution: Resolution,
}

impl Question {
    /// 1-based position in the session.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The date to find the weekday of.
    pub fn date(&self) -> CalendarDate {
        self.resolution.date()
    }

    /// The correct weekday.
    pub fn answer(&self) -> Weekday {
        self.resolution.weekday()
    }

    /// Intermediate values for hints and solutions.
    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }
}

/// Result of answering a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The weekday the user picked.
    pub guess: Weekday,
    /// The correct weekday.
    pub answer: Weekday,
    /// Time since the question was asked; only set in speed mode.
    pub elapsed: Option<Duration>,
}

impl Outcome {
    /// Returns `true` if the guess was right.
    pub fn is_correct(&self) -> bool {
        self.guess == self.answer
    }
}

/// An interactive drill: the current question, its state and the score.
///
/// Owns its random source, so a seeded RNG replays the same questions.
#[derive(Debug)]
pub struct Session<R> {
    mode: Mode,
    config: DrillConfig,
    rng: R,
    question: Question,
    asked_at: Instant,
    outcome: Option<Outcome>,
    hint_visible: bool,
    stats: Stats,
}

impl<R: Rng> Session<R> {
    /// Starts a session in `mode` and draws the first question.
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::InvalidConfig`] if `config` is invalid.
    pub fn new(mode: Mode, config: DrillConfig, mut rng: R) -> Result<Self, TrainerError> {
        config.validate()?;
        let question = draw(&config, &mut rng, 1);
        debug!(number = 1, date = %question.date(), "first question");
        Ok(Self {
            mode,
            config,
            rng,
            question,
            asked_at: Instant::now(),
            outcome: None,
            hint_visible: false,
            stats: Stats::default(),
        })
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Session configuration.
    pub fn config(&self) -> &DrillConfig {
        &self.config
    }

    /// Current question.
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// When the current question was asked.
    pub fn asked_at(&self) -> Instant {
        self.asked_at
    }

    /// Outcome of the current question, `None` until answered.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Returns `true` once the current question has been answered.
    pub fn is_answered(&self) -> bool {
        self.outcome.is_some()
    }

    /// Returns `true` if the hint for the current question is shown.
    pub fn hint_visible(&self) -> bool {
        self.hint_visible
    }

    /// Score so far.
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Returns `true` once the last allowed question has been answered.
    pub fn is_finished(&self) -> bool {
        self.config
            .question_limit()
            .is_some_and(|limit| self.question.number >= limit && self.is_answered())
    }

    /// Switches mode. Entering a drill mode draws a fresh question unless the
    /// question limit is used up; entering speed mode also clears recorded
    /// times.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!(from = ?self.mode, to = ?mode, "mode change");
        self.mode = mode;
        if mode.is_timed() {
            self.stats.clear_times();
        }
        if mode.is_drill() && !self.is_finished() {
            let number = self.question.number + usize::from(self.is_answered());
            self.ask(number);
        }
    }

    /// Answers the current question now.
    ///
    /// # Errors
    ///
    /// See [`Session::answer_at`].
    pub fn answer(&mut self, guess: Weekday) -> Result<Outcome, TrainerError> {
        self.answer_at(guess, Instant::now())
    }

    /// Answers the current question as of `now`.
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::LearnMode`] in learn mode, or
    /// [`TrainerError::AlreadyAnswered`] if the question was already scored.
    #[tracing::instrument(skip(self), fields(number = self.question.number))]
    pub fn answer_at(&mut self, guess: Weekday, now: Instant) -> Result<Outcome, TrainerError> {
        if !self.mode.is_drill() {
            return Err(TrainerError::LearnMode);
        }
        if self.is_answered() {
            return Err(TrainerError::AlreadyAnswered {
                number: self.question.number,
            });
        }
        let elapsed = self
            .mode
            .is_timed()
            .then(|| now.saturating_duration_since(self.asked_at));
        let outcome = Outcome {
            guess,
            answer: self.question.answer(),
            elapsed,
        };
        self.stats.record(outcome.is_correct(), elapsed);
        self.outcome = Some(outcome);
        debug!(correct = outcome.is_correct(), streak = self.stats.streak(), "answer scored");
        Ok(outcome)
    }

    /// Shows or hides the hint, returning the new visibility.
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::HintUnavailable`] outside practice mode or
    /// after the question was answered.
    pub fn toggle_hint(&mut self) -> Result<bool, TrainerError> {
        if !self.mode.explains() || self.is_answered() {
            return Err(TrainerError::HintUnavailable);
        }
        self.hint_visible = !self.hint_visible;
        Ok(self.hint_visible)
    }

    /// Moves on to a new random question.
    ///
    /// # Errors
    ///
    /// Returns [`TrainerError::LearnMode`] in learn mode, or
    /// [`TrainerError::Finished`] once the question limit is used up.
    pub fn next_question(&mut self) -> Result<&Question, TrainerError> {
        if !self.mode.is_drill() {
            return Err(TrainerError::LearnMode);
        }
        if let Some(limit) = self.config.question_limit() {
            if self.question.number >= limit {
                return Err(TrainerError::Finished { limit });
            }
        }
        let number = self.question.number + 1;
        self.ask(number);
        Ok(&self.question)
    }

    fn ask(&mut self, number: usize) {
        self.question = draw(&self.config, &mut self.rng, number);
        self.asked_at = Instant::now();
        self.outcome = None;
        self.hint_visible = false;
        debug!(number, date = %self.question.date(), "new question");
    }
}

fn draw<R: Rng + ?Sized>(config: &DrillConfig, rng: &mut R, number: usize) -> Question {
    let date = config.range().sample(rng);
    Question {
        number,
        resolution: resolve_with(date, config.anchor_rule()),
    }
}
