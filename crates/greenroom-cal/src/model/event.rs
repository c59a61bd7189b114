//! The unified event record and its derived occurrence value.

use std::collections::BTreeSet;

use chrono::NaiveTime;
use greenroom_core::date::{CalendarDate, DateRange};
use greenroom_core::types::{ArtistId, EventId, UserId};
use serde::{Deserialize, Serialize};

use super::recurrence::RecurrenceRule;

/// What kind of calendar entry an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Gig,
    Rehearsal,
    Unavailability,
    Other,
}

impl EventCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gig => "gig",
            Self::Rehearsal => "rehearsal",
            Self::Unavailability => "unavailability",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar event as fetched from storage.
///
/// Ownership is carried by a single field per category: `owner_user_id`
/// identifies the unavailable person on unavailability entries, and
/// `artist_id` is absent on purely personal events. The legacy records mixed
/// several ownership fields; they are resolved to this shape at the
/// data-fetch boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub category: EventCategory,
    pub start_date: CalendarDate,
    /// Absent or equal to `start_date` means single-day.
    #[serde(default)]
    pub end_date: Option<CalendarDate>,
    /// Display only; never consulted by layout math.
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    /// Display only; never consulted by layout math.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub owner_user_id: Option<UserId>,
    #[serde(default)]
    pub artist_id: Option<ArtistId>,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
    /// Occurrence dates deleted individually from an otherwise-recurring
    /// series; consulted by expansion as a final filter.
    #[serde(default)]
    pub excluded_dates: BTreeSet<CalendarDate>,
    /// True for an unavailability entry surfaced from an artist context
    /// different from the viewer's current one.
    #[serde(default)]
    pub cross_artist: bool,
}

impl Event {
    /// A minimal single-day event; the usual starting point for tests and
    /// callers that fill in the rest field by field.
    #[must_use]
    pub fn single_day(id: EventId, category: EventCategory, start_date: CalendarDate) -> Self {
        Self {
            id,
            title: String::new(),
            category,
            start_date,
            end_date: None,
            start_time: None,
            end_time: None,
            owner_user_id: None,
            artist_id: None,
            recurrence: None,
            excluded_dates: BTreeSet::new(),
            cross_artist: false,
        }
    }

    /// Last day the event covers. An `end_date` earlier than `start_date` is
    /// inconsistent stored data and normalizes to single-day rather than
    /// failing the caller.
    #[must_use]
    pub fn effective_end(&self) -> CalendarDate {
        match self.end_date {
            Some(end) if end > self.start_date => end,
            _ => self.start_date,
        }
    }

    /// Inclusive span length in days; single-day events have span 1.
    #[must_use]
    pub fn span_days(&self) -> u32 {
        u32::try_from(self.start_date.days_until(self.effective_end()) + 1).unwrap_or(1)
    }

    #[must_use]
    pub fn is_multi_day(&self) -> bool {
        self.span_days() > 1
    }
}

/// One concrete calendar-date instance of an event: derived at read time,
/// never persisted. The span is copied unchanged from the source event;
/// recurrence never resizes spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub event_id: EventId,
    /// The occurrence's start date.
    pub date: CalendarDate,
    pub span_days: u32,
}

impl Occurrence {
    /// The inclusive day range this occurrence covers.
    #[must_use]
    pub fn span(&self) -> DateRange {
        let end = self.date.plus_days(i64::from(self.span_days.max(1)) - 1);
        DateRange::new(self.date, end).unwrap_or_else(|_| DateRange::single(self.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenroom_core::date::CalendarDate;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn event(start: &str, end: Option<&str>) -> Event {
        let mut e = Event::single_day(EventId::new_random(), EventCategory::Gig, date(start));
        e.end_date = end.map(date);
        e
    }

    #[test]
    fn test_single_day_span() {
        assert_eq!(event("2025-01-09", None).span_days(), 1);
        assert_eq!(event("2025-01-09", Some("2025-01-09")).span_days(), 1);
    }

    #[test]
    fn test_multi_day_span() {
        let e = event("2025-01-09", Some("2025-01-13"));
        assert_eq!(e.span_days(), 5);
        assert!(e.is_multi_day());
    }

    #[test]
    fn test_inconsistent_end_normalizes_to_single_day() {
        let e = event("2025-01-09", Some("2025-01-02"));
        assert_eq!(e.span_days(), 1);
        assert_eq!(e.effective_end(), date("2025-01-09"));
    }

    #[test]
    fn test_occurrence_span_range() {
        let occ = Occurrence {
            event_id: EventId::new_random(),
            date: date("2025-01-09"),
            span_days: 5,
        };
        assert_eq!(occ.span().end(), date("2025-01-13"));
        assert!(occ.span().contains(date("2025-01-11")));
    }

    #[test]
    fn test_event_json_round_trip() {
        let mut e = event("2025-01-09", Some("2025-01-13"));
        e.title = "Tour opener".to_string();
        e.recurrence = Some(
            crate::model::RecurrenceRule::every(crate::model::RecurrenceFreq::Weekly, 2)
                .with_count(5),
        );
        e.excluded_dates.insert(date("2025-01-23"));

        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
