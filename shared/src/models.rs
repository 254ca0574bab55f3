use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an event as assigned by the events API.
///
/// Meetup hands out string ids, but numeric ids are accepted too and are
/// echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Numeric(i64),
    Text(String),
}

/// A point in time carried by an event record.
///
/// The API sends epoch milliseconds; normalization swaps them for a
/// zoned date-time in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum Timestamp {
    EpochMillis(i64),
    DateTime(DateTime<FixedOffset>),
}

impl Timestamp {
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::EpochMillis(_) => None,
        }
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self::EpochMillis(millis)
    }
}

/// Length of an event, raw milliseconds until normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "i64")]
pub enum EventDuration {
    Millis(i64),
    Span(TimeDelta),
}

impl EventDuration {
    pub fn as_span(&self) -> Option<&TimeDelta> {
        match self {
            Self::Span(span) => Some(span),
            Self::Millis(_) => None,
        }
    }
}

impl From<i64> for EventDuration {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

/// The organizing group embedded in an event record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventGroup {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created: Option<Timestamp>,

    /// Fields we do not interpret (urlname, localized_location, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One event as returned by the `/{urlname}/events` endpoint.
///
/// `id`, `time`, `created` and `updated` are required; a record without
/// them is rejected when the response body is decoded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MeetupEvent {
    pub id: EventId,
    pub time: Timestamp,
    pub created: Timestamp,
    pub updated: Timestamp,
    #[serde(default)]
    pub duration: Option<EventDuration>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub group: Option<EventGroup>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
