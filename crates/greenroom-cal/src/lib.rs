//! Recurring-event expansion and calendar-layout engine.
//!
//! ## Summary
//! The computational core of the Greenroom calendar: turning a recurrence
//! rule plus an anchor date into concrete occurrence dates, deciding which
//! events a viewer sees under the three-way toggle model, clipping multi-day
//! spans at week-row boundaries, and assembling the Monday-start month grid
//! the presentation layer renders from.
//!
//! Everything here is pure, synchronous computation: no I/O, no shared
//! state, no clock reads. The current date is always injected by the caller.

pub mod error;
pub mod expand;
pub mod grid;
pub mod layout;
pub mod model;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use error::{CalError, CalResult};
pub use expand::{expand, expand_occurrences};
pub use grid::{DayCell, EventPlacement, MonthGrid, PlacementKind, agenda, build_month_grid};
pub use layout::{SpanSegment, layout_span};
pub use model::{Event, EventCategory, Occurrence, RecurrenceEnd, RecurrenceFreq, RecurrenceRule};
pub use visibility::{VisibilityContext, filter_visible, is_visible};
