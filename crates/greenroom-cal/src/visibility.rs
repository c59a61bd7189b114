//! Viewer-facing visibility filtering under the three-way toggle model.
//!
//! ## Summary
//! Decides per-event inclusion for a given viewer. This is a display
//! preference layer: the fetched event list is already scoped to what the
//! viewer is authorized to see, so nothing here is a security boundary.

use greenroom_core::types::{ArtistId, UserId};
use serde::{Deserialize, Serialize};

use crate::model::{Event, EventCategory};

/// The viewer's identity and toggle state, passed explicitly so the filter
/// stays a total function with no ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityContext {
    pub viewer_user_id: UserId,
    /// The artist whose calendar the viewer is currently in; `None` in
    /// no-artist-context mode.
    pub effective_artist_id: Option<ArtistId>,
    pub show_artist_events: bool,
    pub show_my_events: bool,
    pub show_all_artists: bool,
}

/// ## Summary
/// Per-event visibility decision; first matching rule wins:
///
/// 1. cross-artist unavailability -> artist toggle
/// 2. the viewer's own unavailability -> personal toggle
/// 3. another member's unavailability -> artist toggle
/// 4. personal event (no artist) -> personal toggle
/// 5. event of the current artist -> artist toggle
/// 6. no current artist context -> artist toggle
/// 7. event of a different artist -> all-artists toggle AND artist toggle
///    ("all artists" refines "artist events", it does not replace it)
///
/// Total, side-effect free, and evaluated independently per event, so
/// filtering a list is order-independent.
#[must_use]
pub fn is_visible(event: &Event, ctx: &VisibilityContext) -> bool {
    if event.category == EventCategory::Unavailability {
        if event.cross_artist {
            return ctx.show_artist_events;
        }
        if event.owner_user_id == Some(ctx.viewer_user_id) {
            return ctx.show_my_events;
        }
        return ctx.show_artist_events;
    }

    let Some(artist_id) = event.artist_id else {
        return ctx.show_my_events;
    };
    let Some(effective) = ctx.effective_artist_id else {
        return ctx.show_artist_events;
    };
    if artist_id == effective {
        return ctx.show_artist_events;
    }

    ctx.show_all_artists && ctx.show_artist_events
}

/// The visible subset of `events`, in input order.
#[must_use]
pub fn filter_visible<'a>(events: &'a [Event], ctx: &VisibilityContext) -> Vec<&'a Event> {
    events.iter().filter(|e| is_visible(e, ctx)).collect()
}
