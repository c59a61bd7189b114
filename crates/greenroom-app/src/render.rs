//! Plain-text rendering of a month grid.
//!
//! Stands in for the web presentation layer: one line of day numbers per
//! week-row, then a badge line per non-empty day listing the capped visible
//! titles and the overflow count.

use std::collections::HashMap;
use std::fmt::Write as _;

use greenroom_cal::grid::{DayCell, MonthGrid, PlacementKind};
use greenroom_cal::model::Event;
use greenroom_core::types::EventId;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[must_use]
pub fn render_month(grid: &MonthGrid, events: &[Event]) -> String {
    let titles: HashMap<EventId, &str> = events
        .iter()
        .map(|e| (e.id, e.title.as_str()))
        .collect();

    let month = grid.month();
    let month_name = usize::try_from(month.month())
        .ok()
        .and_then(|m| m.checked_sub(1))
        .and_then(|m| MONTH_NAMES.get(m))
        .copied()
        .unwrap_or("?");

    let mut out = String::new();
    let _ = writeln!(out, "{month_name} {}", month.year());
    out.push_str("Mon  Tue  Wed  Thu  Fri  Sat  Sun\n");

    for week in grid.weeks() {
        for cell in week {
            out.push_str(&day_number(cell));
        }
        out.push('\n');
        for cell in week {
            if cell.placements().is_empty() {
                continue;
            }
            let _ = writeln!(out, "  {:>2}: {}", cell.date.day(), badges(cell, &titles));
        }
    }

    out
}

fn day_number(cell: &DayCell) -> String {
    let day = cell.date.day();
    if cell.is_today {
        format!("[{day:>2}] ")
    } else if cell.in_target_month {
        format!(" {day:>2}  ")
    } else {
        format!(" .{day:<2} ")
    }
}

fn badges(cell: &DayCell, titles: &HashMap<EventId, &str>) -> String {
    let mut parts: Vec<String> = cell
        .visible()
        .iter()
        .map(|p| {
            let title = titles.get(&p.event_id).copied().unwrap_or("(untitled)");
            match p.kind {
                PlacementKind::Continuing => format!("…{title}"),
                PlacementKind::Starting => title.to_string(),
            }
        })
        .collect();
    let overflow = cell.overflow_count();
    if overflow > 0 {
        parts.push(format!("+{overflow} more"));
    }
    parts.join(", ")
}
