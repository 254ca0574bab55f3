use reqwest::{Client, StatusCode};
use shared::MeetupEvent;

use super::MeetupError;
use crate::config::GROUP_PLACEHOLDER;

/// Events requested per group; the API is not paged any further.
const EVENTS_PAGE_SIZE: u32 = 200;

/// Client for the Meetup get-events endpoint.
#[derive(Debug, Clone)]
pub struct MeetupClient {
    http: Client,
    url_template: String,
    api_key: String,
}

impl MeetupClient {
    pub fn new(http: Client, url_template: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url_template: url_template.into(),
            api_key: api_key.into(),
        }
    }

    /// Events URL for one group slug.
    pub fn events_url(&self, group: &str) -> String {
        self.url_template
            .replacen(GROUP_PLACEHOLDER, &urlencoding::encode(group), 1)
    }

    /// Fetch the events of every group, one request after another.
    ///
    /// The result keeps group order, and within a group the order the API
    /// returned. Groups answering with anything but 200 contribute nothing.
    pub async fn fetch_events(&self, groups: &[String]) -> Result<Vec<MeetupEvent>, MeetupError> {
        let mut events = Vec::new();

        for group in groups {
            if let Some(batch) = self.fetch_group(group).await? {
                tracing::debug!(group = %group, count = batch.len(), "Fetched events");
                events.extend(batch);
            }
        }

        Ok(events)
    }

    async fn fetch_group(&self, group: &str) -> Result<Option<Vec<MeetupEvent>>, MeetupError> {
        let page = EVENTS_PAGE_SIZE.to_string();
        let response = self
            .http
            .get(self.events_url(group))
            .query(&[
                ("sign", "true"),
                ("photo-host", "public"),
                ("status", "past,upcoming"),
                ("page", page.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| MeetupError::request(group, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(group = %group, status = %status, "Could not find data for group");
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MeetupError::request(group, e))?;

        let events = serde_json::from_slice(&body).map_err(|source| MeetupError::Decode {
            group: group.to_string(),
            source,
        })?;

        Ok(Some(events))
    }
}
