//! Meetup events: fetching, timestamp normalization and the timeline projection.

mod client;
mod normalize;
mod timeline;

pub use client::MeetupClient;
pub use normalize::{normalize_events, TimezonePolicy};
pub use timeline::to_timeline;

use thiserror::Error;

/// Failures that abort a timeline request.
///
/// A group answering with a non-200 status is not one of them; it is
/// logged and skipped by [`MeetupClient::fetch_events`].
#[derive(Debug, Error)]
pub enum MeetupError {
    /// Transport failure talking to the events API (connect, DNS, body read)
    #[error("Request for group '{group}' failed: {source}")]
    Request {
        group: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 200 response whose body is not a list of events
    #[error("Could not decode events for group '{group}': {source}")]
    Decode {
        group: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Timestamp {field}={millis} is out of range")]
    TimestampOutOfRange { field: &'static str, millis: i64 },

    #[error("Duration of {millis}ms is out of range")]
    DurationOutOfRange { millis: i64 },

    #[error("Event field {field} has not been normalized")]
    NotNormalized { field: &'static str },
}

impl MeetupError {
    /// The request URL carries the API key, so it is dropped from the error.
    pub fn request(group: &str, source: reqwest::Error) -> Self {
        MeetupError::Request {
            group: group.to_string(),
            source: source.without_url(),
        }
    }
}
