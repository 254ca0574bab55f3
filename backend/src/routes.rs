use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{health, timeline};
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new().route("/:meetup", get(timeline::timeline_data))
}

pub fn create_app(state: SharedState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Timeline data, consumed by the page below
        .nest("/api", api_routes())
        // Timeline page
        .route("/timeline/:meetup", get(timeline::timeline_page))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
