use serde::{Deserialize, Serialize};

use crate::models::EventId;

// ============================================================================
// Timeline API Types
// ============================================================================

/// Calendar position of a timeline entry, as TimelineJS expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineText {
    pub headline: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub start_date: StartDate,
    pub text: TimelineText,
    pub group: String,
    pub unique_id: EventId,
}

/// Body of `GET /api/{meetup}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDocument {
    pub events: Vec<TimelineEntry>,
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
