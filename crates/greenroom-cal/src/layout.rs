//! Week-row clipping for multi-day event bars.
//!
//! A span never renders past the end of its Monday-start week-row; the
//! remainder becomes a new segment on the next row, so the month grid never
//! needs cross-row visual elements.

use greenroom_core::constants::DAYS_PER_WEEK;

/// Placement of one rendered bar segment inside a week-row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanSegment {
    /// Grid cells this segment occupies, clipped at the week-row boundary.
    pub cells_to_render: u32,
    /// True at the occurrence's start cell; false for a continuation segment
    /// carried over from a prior week-row.
    pub is_start_segment: bool,
}

/// ## Summary
/// Computes the bar segment beginning at a given grid cell, if one does.
///
/// `span_days` is the occurrence's inclusive length (single day = 1),
/// `days_into_span` how far the cell is from the occurrence's start (0 at
/// the start), and `day_index_in_week` the cell's Monday-start position
/// (0 = Monday .. 6 = Sunday). A segment begins only at the occurrence's
/// start cell or at a Monday cell with span still remaining; every other
/// cell inside the span is covered by an earlier segment and gets `None`.
///
/// The returned cell count never exceeds `7 - day_index_in_week`.
#[must_use]
pub fn layout_span(
    span_days: u32,
    days_into_span: u32,
    day_index_in_week: u32,
) -> Option<SpanSegment> {
    let span_days = span_days.max(1);
    if days_into_span >= span_days || day_index_in_week >= DAYS_PER_WEEK {
        return None;
    }

    let is_start_segment = days_into_span == 0;
    if !is_start_segment && day_index_in_week != 0 {
        // Mid-row day of a running span; rendered by the segment that began
        // earlier in this row.
        return None;
    }

    let remaining_in_span = span_days - days_into_span;
    let remaining_in_week = DAYS_PER_WEEK - day_index_in_week;
    Some(SpanSegment {
        cells_to_render: remaining_in_span.min(remaining_in_week),
        is_start_segment,
    })
}
