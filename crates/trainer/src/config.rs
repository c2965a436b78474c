//! Configuration for a drill session.

use doomsday_calendar::YearRange;
use doomsday_engine::AnchorRule;

use crate::error::TrainerError;

/// Configuration for a drill session.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use doomsday_calendar::YearRange;
/// use doomsday_engine::AnchorRule;
/// use doomsday_trainer::DrillConfig;
///
/// let config = DrillConfig::new()
///     .with_range(YearRange::new(1900, 1999).unwrap())
///     .with_anchor_rule(AnchorRule::Table)
///     .with_question_limit(Some(10));
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillConfig {
    /// Years questions are drawn from.
    range: YearRange,
    /// How century anchors are found in solutions.
    anchor_rule: AnchorRule,
    /// Maximum number of questions, unlimited when `None`.
    question_limit: Option<usize>,
}

impl DrillConfig {
    /// Creates a configuration with the defaults: years 1900..=2100, the
    /// periodic anchor rule and no question limit.
    pub fn new() -> Self {
        Self {
            range: YearRange::default(),
            anchor_rule: AnchorRule::default(),
            question_limit: None,
        }
    }

    /// Sets the year range.
    pub fn with_range(mut self, range: YearRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the anchor rule.
    pub fn with_anchor_rule(mut self, anchor_rule: AnchorRule) -> Self {
        self.anchor_rule = anchor_rule;
        self
    }

    /// Sets the question limit.
    pub fn with_question_limit(mut self, limit: Option<usize>) -> Self {
        self.question_limit = limit;
        self
    }

    /// Returns the year range.
    pub fn range(&self) -> YearRange {
        self.range
    }

    /// Returns the anchor rule.
    pub fn anchor_rule(&self) -> AnchorRule {
        self.anchor_rule
    }

    /// Returns the question limit.
    pub fn question_limit(&self) -> Option<usize> {
        self.question_limit
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the question limit is zero.
    pub fn validate(&self) -> Result<(), TrainerError> {
        if self.question_limit == Some(0) {
            return Err(TrainerError::InvalidConfig {
                reason: "question limit must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self::new()
    }
}
