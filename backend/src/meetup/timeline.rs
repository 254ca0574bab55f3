use chrono::{Datelike, Timelike};
use shared::{MeetupEvent, StartDate, TimelineDocument, TimelineEntry, TimelineText};

use super::MeetupError;

/// Project normalized events into a timeline document, keeping their order.
pub fn to_timeline(events: &[MeetupEvent]) -> Result<TimelineDocument, MeetupError> {
    let events = events
        .iter()
        .map(timeline_entry)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TimelineDocument { events })
}

fn timeline_entry(event: &MeetupEvent) -> Result<TimelineEntry, MeetupError> {
    let time = event
        .time
        .as_datetime()
        .ok_or(MeetupError::NotNormalized { field: "time" })?;

    Ok(TimelineEntry {
        start_date: StartDate {
            year: time.year(),
            month: time.month(),
            day: time.day(),
            hour: time.hour(),
            minute: time.minute(),
        },
        text: TimelineText {
            headline: event.name.clone().unwrap_or_default(),
            text: event.description.clone().unwrap_or_default(),
        },
        group: event
            .group
            .as_ref()
            .and_then(|g| g.name.clone())
            .unwrap_or_default(),
        unique_id: event.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meetup::{normalize_events, TimezonePolicy};
    use serde_json::json;
    use shared::EventId;

    fn normalized(values: Vec<serde_json::Value>) -> Vec<MeetupEvent> {
        let events = values
            .into_iter()
            .map(|v| serde_json::from_value(v).expect("test event should decode"))
            .collect();
        normalize_events(events, TimezonePolicy::Utc).expect("should normalize")
    }

    #[test]
    fn test_entry_fields() {
        let events = normalized(vec![json!({
            "id": 1,
            "time": 1600000000000i64,
            "created": 1600000000000i64,
            "updated": 1600000000000i64,
            "name": "Talk",
            "description": "D",
            "group": {"name": "GA"}
        })]);

        let timeline = to_timeline(&events).unwrap();
        assert_eq!(timeline.events.len(), 1);

        let entry = &timeline.events[0];
        assert_eq!(entry.unique_id, EventId::Numeric(1));
        assert_eq!(
            entry.start_date,
            StartDate {
                year: 2020,
                month: 9,
                day: 13,
                hour: 12,
                minute: 26,
            }
        );
        assert_eq!(entry.text.headline, "Talk");
        assert_eq!(entry.text.text, "D");
        assert_eq!(entry.group, "GA");
    }

    #[test]
    fn test_missing_text_fields_default_to_empty() {
        let events = normalized(vec![
            json!({"id": "no-name", "time": 0, "created": 0, "updated": 0, "description": "only body"}),
            json!({"id": "no-body", "time": 0, "created": 0, "updated": 0, "name": "only title"}),
            json!({"id": "no-group-name", "time": 0, "created": 0, "updated": 0, "group": {"urlname": "x"}}),
            json!({"id": "no-group", "time": 0, "created": 0, "updated": 0}),
        ]);

        let timeline = to_timeline(&events).unwrap();
        let entries = &timeline.events;

        assert_eq!(entries[0].text.headline, "");
        assert_eq!(entries[0].text.text, "only body");
        assert_eq!(entries[1].text.headline, "only title");
        assert_eq!(entries[1].text.text, "");
        assert_eq!(entries[2].group, "");
        assert_eq!(entries[3].group, "");
    }

    #[test]
    fn test_order_and_ids_preserved() {
        let events = normalized(vec![
            json!({"id": "z", "time": 1700000000000i64, "created": 0, "updated": 0}),
            json!({"id": "a", "time": 1600000000000i64, "created": 0, "updated": 0}),
            json!({"id": "z", "time": 1500000000000i64, "created": 0, "updated": 0}),
        ]);

        let timeline = to_timeline(&events).unwrap();
        let ids: Vec<&EventId> = timeline.events.iter().map(|e| &e.unique_id).collect();
        assert_eq!(
            ids,
            vec![
                &EventId::Text("z".into()),
                &EventId::Text("a".into()),
                &EventId::Text("z".into()),
            ]
        );
    }

    #[test]
    fn test_unnormalized_event_rejected() {
        let event: MeetupEvent = serde_json::from_value(json!({
            "id": 1, "time": 0, "created": 0, "updated": 0
        }))
        .unwrap();

        assert!(matches!(
            to_timeline(&[event]),
            Err(MeetupError::NotNormalized { field: "time" })
        ));
    }
}
