use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use shared::TimelineDocument;

use crate::error::ApiResult;
use crate::meetup::{normalize_events, to_timeline};
use crate::state::SharedState;
use crate::templates;

/// `GET /api/{meetup}`: timeline data for one or more `+`-joined groups.
pub async fn timeline_data(
    State(state): State<SharedState>,
    Path(meetup): Path<String>,
) -> ApiResult<Json<TimelineDocument>> {
    let groups = split_groups(&meetup);

    let events = state.meetup.fetch_events(&groups).await?;
    let events = normalize_events(events, state.config.timezone)?;
    let timeline = to_timeline(&events)?;

    tracing::debug!(
        groups = groups.len(),
        events = timeline.events.len(),
        "Built timeline for {}",
        meetup
    );

    Ok(Json(timeline))
}

/// `GET /timeline/{meetup}`: the page that renders the timeline client-side.
pub async fn timeline_page(
    State(state): State<SharedState>,
    Path(meetup): Path<String>,
) -> ApiResult<Html<String>> {
    let page = templates::render_timeline(&state.templates, &meetup)?;
    Ok(Html(page))
}

/// Empty segments are kept; they simply fail upstream.
pub fn split_groups(meetup: &str) -> Vec<String> {
    meetup.split('+').map(str::to_owned).collect()
}
