/// Length of a week-row in the month grid (Monday through Sunday).
pub const DAYS_PER_WEEK: u32 = 7;

/// Default cap on event badges rendered inside one day cell; anything beyond
/// it is reported as an overflow count.
pub const DEFAULT_VISIBLE_EVENTS_PER_DAY: usize = 3;

/// A Monday-start month grid never needs more than six week-rows.
pub const MAX_GRID_WEEKS: usize = 6;
