//! Month grid assembly: events -> per-day, per-week-row placement data.
//!
//! ## Summary
//! Builds the Monday-start month grid the presentation layer renders from:
//! whole weeks padded with adjacent-month days, per-day event placements
//! split into starting and continuing entries, a visible-per-day cap with an
//! overflow count, and injected "today" highlighting. The builder is pure
//! and idempotent; it never reads a clock.

use greenroom_core::constants::MAX_GRID_WEEKS;
use greenroom_core::date::{CalendarDate, DateRange};
use greenroom_core::types::EventId;
use serde::{Deserialize, Serialize};

use crate::error::CalResult;
use crate::expand::expand_occurrences;
use crate::layout::{SpanSegment, layout_span};
use crate::model::{Event, Occurrence};
use crate::visibility::{VisibilityContext, filter_visible};

/// Whether a placement is the occurrence's first day or a later day of its
/// span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementKind {
    Starting,
    Continuing,
}

/// One event's presence on one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventPlacement {
    pub event_id: EventId,
    /// Start date of the occurrence this placement belongs to.
    pub occurrence_start: CalendarDate,
    pub span_days: u32,
    pub kind: PlacementKind,
    /// The bar segment beginning at this cell, when one does: the
    /// occurrence's start cell, or a Monday cell its span wraps into.
    /// Mid-row continuation days carry no segment.
    pub segment: Option<SpanSegment>,
}

/// One cell of the month grid.
#[derive(Debug, Clone)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for adjacent-month padding days (dimmed rendering).
    pub in_target_month: bool,
    pub is_today: bool,
    placements: Vec<EventPlacement>,
    visible_cap: usize,
}

impl DayCell {
    /// Every placement on this day, starting entries and continuations
    /// alike, in render order.
    #[must_use]
    pub fn placements(&self) -> &[EventPlacement] {
        &self.placements
    }

    /// The placements that fit under the per-day cap.
    #[must_use]
    pub fn visible(&self) -> &[EventPlacement] {
        let cap = self.visible_cap.min(self.placements.len());
        self.placements.get(..cap).unwrap_or_default()
    }

    /// How many placements exceed the cap. Overflow is reported, never
    /// dropped, so the caller can offer a "show N more" affordance.
    #[must_use]
    pub fn overflow_count(&self) -> usize {
        self.placements.len().saturating_sub(self.visible_cap)
    }
}

/// A fully assembled Monday-start month grid.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    month: CalendarDate,
    range: DateRange,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    /// First day of the target month.
    #[must_use]
    pub const fn month(&self) -> CalendarDate {
        self.month
    }

    /// The full grid range, Monday of the first row through Sunday of the
    /// last.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    #[must_use]
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// The grid as Monday-start week-rows.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }
}

/// ## Summary
/// Assembles the month grid for the month containing `month_anchor`.
///
/// The grid runs from the Monday on/before the 1st through the Sunday
/// on/after the last day: always whole weeks, never partial. Each event is
/// expanded over the grid range (widened backwards by its span so a
/// multi-day occurrence that begins before the grid still contributes its
/// continuation days), then placed on every day of every occurrence span
/// that intersects the grid. An event whose stored rule is invalid is
/// skipped with a warning: one bad record must not blank the whole month.
///
/// `today` is injected by the caller; the builder never reads a clock.
///
/// ## Errors
/// Returns an error only for an invalid request (a month anchor the date
/// arithmetic cannot form a range around), never for bad event data.
#[tracing::instrument(level = "debug", skip(events), fields(month = %month_anchor, events = events.len()))]
pub fn build_month_grid(
    month_anchor: CalendarDate,
    events: &[Event],
    today: CalendarDate,
    max_visible_per_day: usize,
) -> CalResult<MonthGrid> {
    let first = month_anchor.first_of_month();
    let last = month_anchor.last_of_month();
    let range = DateRange::new(first.week_start(), last.week_end())?;

    let mut cells: Vec<DayCell> = range
        .days()
        .map(|date| DayCell {
            date,
            in_target_month: date.same_month(first),
            is_today: date == today,
            placements: Vec::new(),
            visible_cap: max_visible_per_day,
        })
        .collect();
    debug_assert!(cells.len() <= MAX_GRID_WEEKS * 7);

    for event in events {
        place_event(event, range, &mut cells);
    }

    for cell in &mut cells {
        // Longer spans first, then earlier start, then id: deterministic
        // render order for the presentation layer.
        cell.placements.sort_by(|a, b| {
            b.span_days
                .cmp(&a.span_days)
                .then(a.occurrence_start.cmp(&b.occurrence_start))
                .then(a.event_id.cmp(&b.event_id))
        });
    }

    Ok(MonthGrid {
        month: first,
        range,
        cells,
    })
}

fn place_event(event: &Event, range: DateRange, cells: &mut [DayCell]) {
    // Widen the expansion window backwards so occurrences that start before
    // the grid but run into it are not lost.
    let lookback = i64::from(event.span_days()) - 1;
    let Ok(expand_window) = DateRange::new(range.start().plus_days(-lookback), range.end()) else {
        return;
    };

    let occurrences = match expand_occurrences(event, expand_window) {
        Ok(occurrences) => occurrences,
        Err(err) => {
            tracing::warn!(event_id = %event.id, error = %err, "skipping event with invalid recurrence rule");
            return;
        }
    };

    for occurrence in occurrences {
        place_occurrence(occurrence, range, cells);
    }
}

fn place_occurrence(occurrence: Occurrence, range: DateRange, cells: &mut [DayCell]) {
    let span_days = occurrence.span_days.max(1);
    for (offset, day) in occurrence.span().days().enumerate() {
        let Ok(offset) = u32::try_from(offset) else {
            return;
        };
        if !range.contains(day) {
            continue;
        }
        let Ok(index) = usize::try_from(range.start().days_until(day)) else {
            continue;
        };
        let Some(cell) = cells.get_mut(index) else {
            continue;
        };

        let kind = if offset == 0 {
            PlacementKind::Starting
        } else {
            PlacementKind::Continuing
        };
        cell.placements.push(EventPlacement {
            event_id: occurrence.event_id,
            occurrence_start: occurrence.date,
            span_days,
            kind,
            segment: layout_span(span_days, offset, day.weekday_index()),
        });
    }
}

/// ## Summary
/// Flat chronological agenda of the visible occurrences in a window: the
/// same expansion and visibility pipeline as the grid, without per-week
/// layout. Events with invalid stored rules are skipped with a warning,
/// matching the grid's degradation policy.
#[must_use]
pub fn agenda(
    events: &[Event],
    window: DateRange,
    ctx: &VisibilityContext,
) -> Vec<Occurrence> {
    let mut entries = Vec::new();
    for event in filter_visible(events, ctx) {
        match expand_occurrences(event, window) {
            Ok(occurrences) => entries.extend(occurrences),
            Err(err) => {
                tracing::warn!(event_id = %event.id, error = %err, "skipping event with invalid recurrence rule");
            }
        }
    }
    entries.sort_by(|a, b| a.date.cmp(&b.date).then(a.event_id.cmp(&b.event_id)));
    entries
}
