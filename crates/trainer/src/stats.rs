//! Running score for a drill.

use std::time::Duration;

/// Streaks, accuracy and answer times accumulated over a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stats {
    streak: u32,
    best_streak: u32,
    correct: u32,
    attempts: u32,
    times: Vec<Duration>,
}

impl Stats {
    /// Records one scored answer. `elapsed` is kept only for correct answers.
    pub fn record(&mut self, correct: bool, elapsed: Option<Duration>) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
            self.best_streak = self.best_streak.max(self.streak);
            if let Some(t) = elapsed {
                self.times.push(t);
            }
        } else {
            self.streak = 0;
        }
    }

    /// Forgets recorded answer times; counts and streaks are kept.
    pub fn clear_times(&mut self) {
        self.times.clear();
    }

    /// Current run of consecutive correct answers.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Longest streak so far.
    pub fn best_streak(&self) -> u32 {
        self.best_streak
    }

    /// Number of correct answers.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Number of answers given.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Percentage of correct answers, rounded; 0 before the first answer.
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (f64::from(self.correct) / f64::from(self.attempts) * 100.0).round() as u32
    }

    /// Number of timed correct answers.
    pub fn solved(&self) -> usize {
        self.times.len()
    }

    /// Recorded times of correct timed answers.
    pub fn times(&self) -> &[Duration] {
        &self.times
    }

    /// Mean answer time in seconds, `None` without timed answers.
    pub fn average_secs(&self) -> Option<f64> {
        if self.times.is_empty() {
            return None;
        }
        let total: f64 = self.times.iter().map(Duration::as_secs_f64).sum();
        Some(total / self.times.len() as f64)
    }

    /// Fastest answer time in seconds, `None` without timed answers.
    pub fn best_secs(&self) -> Option<f64> {
        self.times.iter().min().map(Duration::as_secs_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty() {
        let stats = Stats::default();
        assert_eq!(stats.accuracy_percent(), 0);
        assert_eq!(stats.average_secs(), None);
        assert_eq!(stats.best_secs(), None);
    }

    #[test]
    fn streaks() {
        let mut stats = Stats::default();
        for correct in [true, true, true, false, true] {
            stats.record(correct, None);
        }
        assert_eq!(stats.streak(), 1);
        assert_eq!(stats.best_streak(), 3);
        assert_eq!(stats.correct(), 4);
        assert_eq!(stats.attempts(), 5);
        assert_eq!(stats.accuracy_percent(), 80);
    }

    #[test]
    fn accuracy_rounds() {
        let mut stats = Stats::default();
        stats.record(true, None);
        stats.record(true, None);
        stats.record(false, None);
        assert_eq!(stats.accuracy_percent(), 67);
    }

    #[test]
    fn times_only_for_correct_answers() {
        let mut stats = Stats::default();
        stats.record(true, Some(Duration::from_millis(1500)));
        stats.record(false, Some(Duration::from_secs(9)));
        stats.record(true, Some(Duration::from_millis(2500)));
        assert_eq!(stats.solved(), 2);
        assert_abs_diff_eq!(stats.average_secs().unwrap(), 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(stats.best_secs().unwrap(), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn clear_times_keeps_counts() {
        let mut stats = Stats::default();
        stats.record(true, Some(Duration::from_secs(4)));
        stats.clear_times();
        assert_eq!(stats.solved(), 0);
        assert_eq!(stats.correct(), 1);
        assert_eq!(stats.streak(), 1);
    }
}
