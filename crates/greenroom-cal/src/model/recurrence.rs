//! Recurrence rules: repeat frequency, interval, and termination.

use greenroom_core::date::CalendarDate;
use serde::{Deserialize, Serialize};

use crate::error::{CalError, CalResult};

/// Unit of repetition for a recurring event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceFreq {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceFreq {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrenceFreq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a recurring series terminates.
///
/// Replaces the separate `termination` / `count` / `until` fields of the
/// stored record with one sum type, so an impossible combination (a count
/// without a count-terminated rule) cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceEnd {
    /// The series never ends; expansion is bounded by the query window.
    Never,
    /// Exactly this many occurrences, counted from the anchor date
    /// regardless of any query window.
    AfterCount(u32),
    /// Occurrences stop after this date (inclusive).
    UntilDate(CalendarDate),
}

/// A compact recurrence rule: repeat every `interval` units of `freq`,
/// terminated per `end`.
///
/// An event without a rule (`Event.recurrence = None`) is inert: its anchor
/// date is its only occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub freq: RecurrenceFreq,
    pub interval: u32,
    pub end: RecurrenceEnd,
}

impl RecurrenceRule {
    /// An every-N-units rule that never terminates.
    #[must_use]
    pub const fn every(freq: RecurrenceFreq, interval: u32) -> Self {
        Self {
            freq,
            interval,
            end: RecurrenceEnd::Never,
        }
    }

    #[must_use]
    pub const fn with_count(mut self, count: u32) -> Self {
        self.end = RecurrenceEnd::AfterCount(count);
        self
    }

    #[must_use]
    pub const fn with_until(mut self, until: CalendarDate) -> Self {
        self.end = RecurrenceEnd::UntilDate(until);
        self
    }

    /// ## Summary
    /// Validates the rule against its anchor date.
    ///
    /// ## Errors
    /// Returns [`CalError::InvalidRule`] when `interval < 1`, an
    /// `AfterCount` rule has a zero count, or an `UntilDate` rule ends
    /// before the anchor. These are data-integrity problems with the stored
    /// event, never transient failures.
    pub fn validate(&self, anchor: CalendarDate) -> CalResult<()> {
        if self.interval < 1 {
            return Err(CalError::InvalidRule(format!(
                "interval must be >= 1, got {}",
                self.interval
            )));
        }
        match self.end {
            RecurrenceEnd::AfterCount(count) if count < 1 => Err(CalError::InvalidRule(
                "afterCount termination requires a positive count".to_string(),
            )),
            RecurrenceEnd::UntilDate(until) if until < anchor => Err(CalError::InvalidRule(
                format!("until date {until} precedes anchor {anchor}"),
            )),
            _ => Ok(()),
        }
    }

    /// The `n`-th candidate occurrence date, computed from the anchor rather
    /// than the previous candidate so month-end clamping never drifts
    /// (Jan 31 -> Feb 28 -> Mar 31, not Mar 28).
    #[must_use]
    pub(crate) fn nth_candidate(&self, anchor: CalendarDate, n: i64) -> CalendarDate {
        let steps = n.saturating_mul(i64::from(self.interval));
        match self.freq {
            RecurrenceFreq::Daily => anchor.plus_days(steps),
            RecurrenceFreq::Weekly => anchor.plus_weeks(steps),
            RecurrenceFreq::Monthly => anchor.plus_months(steps),
            RecurrenceFreq::Yearly => anchor.plus_years(steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_zero_interval_is_invalid() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Daily, 0);
        assert!(matches!(
            rule.validate(date("2025-01-01")),
            Err(CalError::InvalidRule(_))
        ));
    }

    #[test]
    fn test_zero_count_is_invalid() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Weekly, 1).with_count(0);
        assert!(rule.validate(date("2025-01-01")).is_err());
    }

    #[test]
    fn test_until_before_anchor_is_invalid() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Weekly, 1).with_until(date("2024-12-31"));
        assert!(rule.validate(date("2025-01-01")).is_err());
    }

    #[test]
    fn test_until_on_anchor_is_valid() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Weekly, 1).with_until(date("2025-01-01"));
        assert!(rule.validate(date("2025-01-01")).is_ok());
    }

    #[test]
    fn test_monthly_candidates_clamp_without_drift() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Monthly, 1);
        let anchor = date("2025-01-31");
        assert_eq!(rule.nth_candidate(anchor, 0), date("2025-01-31"));
        assert_eq!(rule.nth_candidate(anchor, 1), date("2025-02-28"));
        // The clamped February candidate does not shorten March.
        assert_eq!(rule.nth_candidate(anchor, 2), date("2025-03-31"));
        assert_eq!(rule.nth_candidate(anchor, 3), date("2025-04-30"));
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        let rule = RecurrenceRule::every(RecurrenceFreq::Yearly, 1);
        let anchor = date("2024-02-29");
        assert_eq!(rule.nth_candidate(anchor, 1), date("2025-02-28"));
        assert_eq!(rule.nth_candidate(anchor, 4), date("2028-02-29"));
    }
}
