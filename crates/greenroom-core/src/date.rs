//! Civil-date type and arithmetic for the calendar engine.
//!
//! ## Summary
//! A [`CalendarDate`] is an opaque calendar day with no time-of-day or
//! time-zone component, canonically written `yyyy-MM-dd`. Every comparison in
//! the engine is plain [`Ord`] on the civil date; no instant type appears
//! anywhere, so month and week boundaries can never drift across zone
//! offsets.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An opaque calendar day, ordered chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from calendar components, if they form a valid day.
    #[must_use]
    pub fn ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Advances by a signed number of days, saturating at the calendar's
    /// representable bounds.
    #[must_use]
    pub fn plus_days(self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map_or(self, Self)
    }

    #[must_use]
    pub fn plus_weeks(self, weeks: i64) -> Self {
        self.plus_days(weeks.saturating_mul(7))
    }

    /// Advances by whole months, preserving the day-of-month and clamping to
    /// the last day of shorter months (Jan 31 + 1 month = Feb 28/29).
    #[must_use]
    pub fn plus_months(self, months: i64) -> Self {
        let months0 =
            i64::from(self.0.year()) * 12 + i64::from(self.0.month()) - 1 + months;
        let Ok(year) = i32::try_from(months0.div_euclid(12)) else {
            return self;
        };
        let Ok(month_index) = u32::try_from(months0.rem_euclid(12)) else {
            return self;
        };
        let month = month_index + 1;
        let day = self.0.day().min(days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day).map_or(self, Self)
    }

    /// Advances by whole years; Feb 29 clamps to Feb 28 on non-leap years.
    #[must_use]
    pub fn plus_years(self, years: i64) -> Self {
        self.plus_months(years.saturating_mul(12))
    }

    /// Signed day count from `self` to `other` (positive when `other` is
    /// later).
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Day position within a Monday-start week: 0 = Monday .. 6 = Sunday.
    #[must_use]
    pub fn weekday_index(self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// The Monday on or before this date.
    #[must_use]
    pub fn week_start(self) -> Self {
        self.plus_days(-i64::from(self.weekday_index()))
    }

    /// The Sunday on or after this date.
    #[must_use]
    pub fn week_end(self) -> Self {
        self.plus_days(i64::from(6 - self.weekday_index()))
    }

    #[must_use]
    pub fn first_of_month(self) -> Self {
        NaiveDate::from_ymd_opt(self.0.year(), self.0.month(), 1).map_or(self, Self)
    }

    #[must_use]
    pub fn last_of_month(self) -> Self {
        let day = days_in_month(self.0.year(), self.0.month());
        NaiveDate::from_ymd_opt(self.0.year(), self.0.month(), day).map_or(self, Self)
    }

    /// True when both dates fall in the same calendar month.
    #[must_use]
    pub fn same_month(self, other: Self) -> bool {
        self.0.year() == other.0.year() && self.0.month() == other.0.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CoreError::ParseError(format!("invalid calendar date {s:?}: {e}")))
    }
}

/// Number of days in the given calendar month.
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year test.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// An inclusive range of calendar days, validated at construction so that
/// `end` never precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: CalendarDate,
    end: CalendarDate,
}

impl DateRange {
    /// ## Summary
    /// Builds an inclusive range.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] when `end` precedes `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> CoreResult<Self> {
        if end < start {
            return Err(CoreError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A single-day range.
    #[must_use]
    pub const fn single(day: CalendarDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    #[must_use]
    pub const fn start(self) -> CalendarDate {
        self.start
    }

    #[must_use]
    pub const fn end(self) -> CalendarDate {
        self.end
    }

    #[must_use]
    pub fn contains(self, day: CalendarDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Inclusive length in days; a single-day range has length 1.
    #[must_use]
    pub fn len_days(self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Iterates every day in the range, in order.
    pub fn days(self) -> impl Iterator<Item = CalendarDate> {
        std::iter::successors(Some(self.start), move |d| {
            let next = d.plus_days(1);
            (next <= self.end).then_some(next)
        })
    }
}
