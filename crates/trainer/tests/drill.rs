use std::time::Duration;

use approx::assert_abs_diff_eq;
use doomsday_calendar::{Weekday, YearRange};
use doomsday_engine::{AnchorRule, day_of_week};
use doomsday_trainer::{DrillConfig, Input, Mode, Session, TrainerError};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config() -> DrillConfig {
    DrillConfig::new().with_range(YearRange::new(1950, 2050).unwrap())
}

#[test]
fn same_seed_same_questions() {
    let mut a = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(9)).unwrap();
    let mut b = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(9)).unwrap();
    for _ in 0..20 {
        assert_eq!(a.question().date(), b.question().date());
        a.next_question().unwrap();
        b.next_question().unwrap();
    }
}

#[test]
fn questions_respect_range_and_have_correct_answers() {
    let mut s = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(3)).unwrap();
    for _ in 0..200 {
        let date = s.question().date();
        assert!((1950..=2050).contains(&date.year()));
        assert_eq!(
            s.question().answer(),
            day_of_week(date.month().number(), date.day(), date.year()).unwrap()
        );
        s.next_question().unwrap();
    }
}

#[test]
fn question_limit_finishes_drill() {
    let config = config().with_question_limit(Some(2));
    let mut s = Session::new(Mode::Practice, config, StdRng::seed_from_u64(0)).unwrap();
    let answer = s.question().answer();
    s.answer(answer).unwrap();
    assert!(!s.is_finished());
    s.next_question().unwrap();
    let answer = s.question().answer();
    s.answer(answer).unwrap();
    assert!(s.is_finished());
    assert_eq!(
        s.next_question().unwrap_err(),
        TrainerError::Finished { limit: 2 }
    );
}

#[test]
fn mode_switch_after_last_question_keeps_drill_finished() {
    let config = config().with_question_limit(Some(1));
    let mut s = Session::new(Mode::Practice, config, StdRng::seed_from_u64(0)).unwrap();
    let answer = s.question().answer();
    s.answer(answer).unwrap();
    assert!(s.is_finished());

    s.set_mode(Mode::Speed);
    assert_eq!(s.mode(), Mode::Speed);
    assert_eq!(s.question().number(), 1);
    assert!(s.is_finished());
    assert_eq!(
        s.answer(answer).unwrap_err(),
        TrainerError::AlreadyAnswered { number: 1 }
    );
    assert_eq!(s.stats().attempts(), 1);
}

#[test]
fn zero_limit_rejected_at_start() {
    let config = config().with_question_limit(Some(0));
    assert!(matches!(
        Session::new(Mode::Speed, config, StdRng::seed_from_u64(0)),
        Err(TrainerError::InvalidConfig { .. })
    ));
}

#[test]
fn speed_drill_statistics() {
    let mut s = Session::new(Mode::Speed, config(), StdRng::seed_from_u64(5)).unwrap();
    for secs in [4, 2, 6] {
        let answer = s.question().answer();
        let now = s.asked_at() + Duration::from_secs(secs);
        s.answer_at(answer, now).unwrap();
        s.next_question().unwrap();
    }
    let answer = s.question().answer();
    s.answer(answer.add_days(3)).unwrap();

    let stats = s.stats();
    assert_eq!(stats.solved(), 3);
    assert_eq!(stats.attempts(), 4);
    assert_eq!(stats.accuracy_percent(), 75);
    assert_eq!(stats.best_streak(), 3);
    assert_abs_diff_eq!(stats.average_secs().unwrap(), 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.best_secs().unwrap(), 2.0, epsilon = 1e-9);
}

#[test]
fn entering_speed_mode_clears_times() {
    let mut s = Session::new(Mode::Speed, config(), StdRng::seed_from_u64(5)).unwrap();
    let answer = s.question().answer();
    s.answer(answer).unwrap();
    assert_eq!(s.stats().solved(), 1);

    s.set_mode(Mode::Practice);
    assert_eq!(s.stats().solved(), 1);
    assert!(!s.is_answered());

    s.set_mode(Mode::Speed);
    assert_eq!(s.stats().solved(), 0);
    assert_eq!(s.stats().correct(), 1);
}

#[test]
fn practice_answers_are_untimed() {
    let mut s = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(8)).unwrap();
    let answer = s.question().answer();
    let outcome = s.answer(answer).unwrap();
    assert_eq!(outcome.elapsed, None);
    assert_eq!(s.stats().solved(), 0);
}

#[test]
fn keys_drive_a_session() {
    let mut s = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(12)).unwrap();
    let key = (s.question().answer().index() + 1).to_string();
    match key.parse::<Input>().unwrap() {
        Input::Guess(day) => assert!(s.answer(day).unwrap().is_correct()),
        other => panic!("expected a guess, got {other:?}"),
    }
    assert_eq!(" ".parse::<Input>().unwrap(), Input::Next);
    assert_eq!(s.next_question().unwrap().number(), 2);
}

#[test]
fn table_rule_sessions_use_table_anchors() {
    let config = DrillConfig::new()
        .with_range(YearRange::new(1500, 1599).unwrap())
        .with_anchor_rule(AnchorRule::Table);
    let s = Session::new(Mode::Practice, config, StdRng::seed_from_u64(1)).unwrap();
    let first_line = &s.question().resolution().solution_lines()[0];
    assert_eq!(first_line, "Century anchor for 1500s: Tuesday (2)");
    assert_ne!(
        s.question().answer(),
        day_of_week(
            s.question().date().month().number(),
            s.question().date().day(),
            s.question().date().year()
        )
        .unwrap()
    );
}

#[test]
fn wrong_guess_reports_the_answer() {
    let mut s = Session::new(Mode::Practice, config(), StdRng::seed_from_u64(30)).unwrap();
    let answer = s.question().answer();
    let guess = if answer == Weekday::Sunday {
        Weekday::Monday
    } else {
        Weekday::Sunday
    };
    let outcome = s.answer(guess).unwrap();
    assert!(!outcome.is_correct());
    assert_eq!(outcome.answer, answer);
}
