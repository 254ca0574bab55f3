pub mod api;
pub mod models;

pub use api::{ErrorResponse, StartDate, TimelineDocument, TimelineEntry, TimelineText};
pub use models::{EventDuration, EventGroup, EventId, MeetupEvent, Timestamp};
