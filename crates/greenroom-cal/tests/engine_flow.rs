//! End-to-end flow: fetched events -> visibility filter -> month grid.

use greenroom_cal::model::{Event, EventCategory, RecurrenceFreq, RecurrenceRule};
use greenroom_cal::visibility::{VisibilityContext, filter_visible};
use greenroom_cal::{PlacementKind, agenda, build_month_grid};
use greenroom_core::date::{CalendarDate, DateRange};
use greenroom_core::types::{ArtistId, EventId, UserId};

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

struct Fixture {
    viewer: UserId,
    artist: ArtistId,
    other_artist: ArtistId,
    events: Vec<Event>,
}

/// A month of band life: a weekly rehearsal, a multi-day tour gig, the
/// viewer's own unavailability, and a foreign artist's gig.
fn fixture() -> Fixture {
    let viewer = UserId::new_random();
    let artist = ArtistId::new_random();
    let other_artist = ArtistId::new_random();

    let mut rehearsal = Event::single_day(
        EventId::new_random(),
        EventCategory::Rehearsal,
        date("2025-01-06"),
    );
    rehearsal.title = "Tuesday woodshed".to_string();
    rehearsal.artist_id = Some(artist);
    rehearsal.recurrence = Some(RecurrenceRule::every(RecurrenceFreq::Weekly, 1).with_count(4));

    let mut tour = Event::single_day(EventId::new_random(), EventCategory::Gig, date("2025-01-09"));
    tour.title = "Coast run".to_string();
    tour.artist_id = Some(artist);
    tour.end_date = Some(date("2025-01-13"));

    let mut away = Event::single_day(
        EventId::new_random(),
        EventCategory::Unavailability,
        date("2025-01-20"),
    );
    away.owner_user_id = Some(viewer);
    away.artist_id = Some(artist);

    let mut foreign = Event::single_day(
        EventId::new_random(),
        EventCategory::Gig,
        date("2025-01-22"),
    );
    foreign.artist_id = Some(other_artist);

    Fixture {
        viewer,
        artist,
        other_artist,
        events: vec![rehearsal, tour, away, foreign],
    }
}

fn ctx(f: &Fixture) -> VisibilityContext {
    VisibilityContext {
        viewer_user_id: f.viewer,
        effective_artist_id: Some(f.artist),
        show_artist_events: true,
        show_my_events: true,
        show_all_artists: false,
    }
}

#[test_log::test]
fn month_view_pipeline() {
    let f = fixture();
    let ctx = ctx(&f);

    let visible: Vec<Event> = filter_visible(&f.events, &ctx)
        .into_iter()
        .cloned()
        .collect();
    // The foreign artist's gig is toggled out.
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|e| e.artist_id != Some(f.other_artist)));

    let grid = build_month_grid(date("2025-01-01"), &visible, date("2025-01-15"), 3).unwrap();
    assert_eq!(grid.cells().len() % 7, 0);

    // Weekly rehearsal occupies four Mondays.
    let mondays: Vec<_> = grid
        .cells()
        .iter()
        .filter(|c| c.date.weekday_index() == 0 && !c.placements().is_empty())
        .collect();
    assert!(mondays.len() >= 3);

    // The tour wraps Thursday -> Monday: start segment of four cells, then a
    // one-cell continuation on the next row.
    let thursday = grid
        .cells()
        .iter()
        .find(|c| c.date == date("2025-01-09"))
        .unwrap();
    let start = thursday
        .placements()
        .iter()
        .find(|p| p.kind == PlacementKind::Starting && p.span_days == 5)
        .unwrap();
    assert_eq!(start.segment.unwrap().cells_to_render, 4);

    let monday = grid
        .cells()
        .iter()
        .find(|c| c.date == date("2025-01-13"))
        .unwrap();
    let cont = monday
        .placements()
        .iter()
        .find(|p| p.span_days == 5)
        .unwrap();
    assert_eq!(cont.kind, PlacementKind::Continuing);
    assert_eq!(cont.segment.unwrap().cells_to_render, 1);
}

#[test_log::test]
fn agenda_matches_grid_occurrence_set() {
    let f = fixture();
    let ctx = ctx(&f);
    let window = DateRange::new(date("2024-12-30"), date("2025-02-02")).unwrap();

    let entries = agenda(&f.events, window, &ctx);
    // 4 rehearsals + 1 tour start + 1 unavailability; the foreign gig is
    // filtered out before expansion.
    assert_eq!(entries.len(), 6);
    assert!(entries.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test_log::test]
fn toggles_change_the_visible_world() {
    let f = fixture();
    let mut ctx = ctx(&f);
    ctx.show_artist_events = false;

    let visible = filter_visible(&f.events, &ctx);
    // Only the viewer's own unavailability survives.
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].category, EventCategory::Unavailability);

    ctx.show_my_events = false;
    assert!(filter_visible(&f.events, &ctx).is_empty());

    ctx.show_artist_events = true;
    ctx.show_all_artists = true;
    let all = filter_visible(&f.events, &ctx);
    // Everything except the personal toggle's entries.
    assert!(all.iter().any(|e| e.artist_id == Some(f.other_artist)));
}
