//! Helpers shared by the unit tests: a fake Meetup API and app state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use crate::config::{AppConfig, ServerBackend};
use crate::meetup::TimezonePolicy;
use crate::state::{AppState, SharedState};

/// What the fake API answers for one group.
#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    body: Value,
}

impl MockResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: json!({"errors": [{"code": "group_error", "message": "Invalid group urlname"}]}),
        }
    }
}

/// One request received by the fake API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub group: String,
    pub query: HashMap<String, String>,
}

#[derive(Clone)]
struct MockState {
    responses: Arc<HashMap<String, MockResponse>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockMeetupApi {
    pub url_template: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockMeetupApi {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn mock_events(
    State(state): State<MockState>,
    Path(group): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    state.requests.lock().unwrap().push(RecordedRequest {
        group: group.clone(),
        query,
    });

    match state.responses.get(&group) {
        Some(response) => (
            StatusCode::from_u16(response.status).unwrap(),
            Json(response.body.clone()),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(MockResponse::status(404).body),
        ),
    }
}

/// Serve a fake `/{group}/events` endpoint on a random local port.
///
/// Groups without a configured response answer 404.
pub async fn mock_meetup_api(responses: Vec<(&str, MockResponse)>) -> MockMeetupApi {
    let state = MockState {
        responses: Arc::new(
            responses
                .into_iter()
                .map(|(group, response)| (group.to_string(), response))
                .collect(),
        ),
        requests: Arc::new(Mutex::new(Vec::new())),
    };
    let requests = state.requests.clone();

    let app = Router::new()
        .route("/:group/events", get(mock_events))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockMeetupApi {
        url_template: format!("http://{}/{{}}/events", addr),
        requests,
    }
}

/// URL template pointing at a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/{{}}/events", addr)
}

pub fn test_config(url_template: &str) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        debug: false,
        server: ServerBackend::CurrentThread,
        meetup_api_key: "test-key".to_string(),
        meetup_api_url: url_template.to_string(),
        timezone: TimezonePolicy::Utc,
    }
}

/// HTTP client that talks to the fake API directly, ignoring proxy settings.
pub fn test_http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("test client should build")
}

pub fn test_state(url_template: &str) -> SharedState {
    AppState::with_http_client(test_config(url_template), test_http_client())
        .expect("test state should build")
}
