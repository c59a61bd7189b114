//! Event and recurrence data model.

pub mod event;
pub mod recurrence;

pub use event::{Event, EventCategory, Occurrence};
pub use recurrence::{RecurrenceEnd, RecurrenceFreq, RecurrenceRule};
