//! Recurrence expansion: rule + anchor date -> concrete occurrence dates.
//!
//! ## Summary
//! Expansion is a read-time projection: it never mutates or persists event
//! records, and it is a pure function of its inputs. A `Never`-terminated
//! rule is bounded by the caller-supplied query window; nothing here ever
//! iterates an unbounded series.

use greenroom_core::date::{CalendarDate, DateRange};

use crate::error::CalResult;
use crate::model::{Event, Occurrence, RecurrenceEnd, RecurrenceFreq, RecurrenceRule};

/// ## Summary
/// Expands an event into the ascending list of occurrence start dates that
/// fall inside `window`.
///
/// An event without a recurrence rule contributes at most its anchor date.
/// With a rule, candidates are generated anchor-relative every
/// `interval` units; `AfterCount` counts from the anchor independent of the
/// window ("every week, 10 times" means the first ten weekly dates from the
/// anchor, not ten dates inside whatever window happens to be queried).
/// Dates in the event's exclusion list are dropped last, after termination
/// bookkeeping, so a deleted occurrence still consumes its count slot.
///
/// ## Errors
/// Returns [`crate::CalError::InvalidRule`] for a malformed rule (see
/// [`RecurrenceRule::validate`]). Window validity is enforced by
/// [`DateRange`] construction at the call site.
#[tracing::instrument(level = "debug", skip(event), fields(event_id = %event.id))]
pub fn expand(event: &Event, window: DateRange) -> CalResult<Vec<CalendarDate>> {
    let anchor = event.start_date;

    let Some(rule) = event.recurrence else {
        let hit = window.contains(anchor) && !event.excluded_dates.contains(&anchor);
        return Ok(if hit { vec![anchor] } else { Vec::new() });
    };

    rule.validate(anchor)?;

    let mut dates = Vec::new();
    let mut n = first_candidate_index(&rule, anchor, window.start());
    loop {
        if let RecurrenceEnd::AfterCount(count) = rule.end {
            if n >= i64::from(count) {
                break;
            }
        }

        let candidate = rule.nth_candidate(anchor, n);

        if let RecurrenceEnd::UntilDate(until) = rule.end {
            if candidate > until {
                break;
            }
        }
        if candidate > window.end() {
            break;
        }

        if window.contains(candidate) && !event.excluded_dates.contains(&candidate) {
            dates.push(candidate);
        }
        n += 1;
    }

    tracing::trace!(occurrences = dates.len(), "expanded recurrence");
    Ok(dates)
}

/// ## Summary
/// Like [`expand`], but lifts each date to an [`Occurrence`] carrying the
/// event's span unchanged.
///
/// ## Errors
/// Same as [`expand`].
pub fn expand_occurrences(event: &Event, window: DateRange) -> CalResult<Vec<Occurrence>> {
    let span_days = event.span_days();
    Ok(expand(event, window)?
        .into_iter()
        .map(|date| Occurrence {
            event_id: event.id,
            date,
            span_days,
        })
        .collect())
}

/// First candidate index worth generating for the window. Daily and weekly
/// rules have a fixed day step, so candidates strictly before the window can
/// be skipped arithmetically instead of iterated one by one; month-based
/// rules have irregular steps and start from the anchor.
fn first_candidate_index(
    rule: &RecurrenceRule,
    anchor: CalendarDate,
    window_start: CalendarDate,
) -> i64 {
    let step_days = match rule.freq {
        RecurrenceFreq::Daily => i64::from(rule.interval),
        RecurrenceFreq::Weekly => i64::from(rule.interval) * 7,
        RecurrenceFreq::Monthly | RecurrenceFreq::Yearly => return 0,
    };
    let gap = anchor.days_until(window_start);
    if gap <= 0 { 0 } else { (gap + step_days - 1) / step_days }
}
