//! Error handling for the HTTP handlers.
//!
//! Handlers return [`ApiResult`] and use `?`; [`ApiError`] turns whatever
//! went wrong into a status code and a JSON [`ErrorResponse`] body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;

use crate::meetup::MeetupError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Fetching or reshaping events failed
    #[error(transparent)]
    Meetup(#[from] MeetupError),

    /// The timeline page could not be rendered
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::Meetup(MeetupError::Request { group, source }) => {
                tracing::error!(group = %group, "Events API request failed: {:?}", source);
                (StatusCode::BAD_GATEWAY, "Events API unavailable")
            }
            ApiError::Meetup(e) => {
                tracing::error!("Could not build timeline: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ApiError::Template(e) => {
                tracing::error!("Template error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(ErrorResponse::with_details(error_message, self.to_string()));

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
