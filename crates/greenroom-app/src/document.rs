//! The JSON document shape the data-fetch layer hands the app: a viewer
//! context plus the event list already scoped to that viewer.

use greenroom_cal::model::Event;
use greenroom_cal::visibility::VisibilityContext;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CalendarDocument {
    pub context: VisibilityContext,
    pub events: Vec<Event>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_minimal_document() {
        let raw = r#"{
            "context": {
                "viewer_user_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "effective_artist_id": null,
                "show_artist_events": true,
                "show_my_events": true,
                "show_all_artists": false
            },
            "events": [
                {
                    "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
                    "title": "Album release show",
                    "category": "gig",
                    "start_date": "2025-01-09",
                    "end_date": "2025-01-13",
                    "recurrence": {
                        "freq": "weekly",
                        "interval": 1,
                        "end": { "after_count": 3 }
                    }
                }
            ]
        }"#;

        let doc: CalendarDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.events.len(), 1);
        assert_eq!(doc.events[0].span_days(), 5);
        assert!(doc.events[0].recurrence.is_some());
    }
}
