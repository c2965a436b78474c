//! Drill sessions for practising the Doomsday algorithm.
//!
//! A [`Session`] draws random dates from a [`DrillConfig`]'s year range,
//! scores weekday guesses and keeps a running [`Stats`] score. In
//! [`Mode::Practice`] hints and worked solutions are available; in
//! [`Mode::Speed`] answer times are recorded instead. [`lessons`] builds the
//! learn-mode walkthrough.
//!
//! # Quick start
//!
//! ```
//! use doomsday_trainer::{DrillConfig, Mode, Session};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut session = Session::new(Mode::Practice, DrillConfig::new(), StdRng::seed_from_u64(1)).unwrap();
//! let answer = session.question().answer();
//! assert!(session.answer(answer).unwrap().is_correct());
//! assert_eq!(session.stats().streak(), 1);
//! ```

mod config;
mod error;
mod input;
mod lesson;
mod mode;
mod session;
mod stats;

pub use config::DrillConfig;
pub use error::TrainerError;
pub use input::Input;
pub use lesson::{LESSON_COUNT, Lesson, lessons};
pub use mode::Mode;
pub use session::{Outcome, Question, Session};
pub use stats::Stats;
