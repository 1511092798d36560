//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geomon_domain::error::ValidationError;

use crate::mock::StatusBody;

/// Failures reported to the dashboard as `{"status":"error","message":...}`.
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Invalid request body.")]
    Body(#[from] JsonRejection),
}

impl IntoResponse for MockError {
    fn into_response(self) -> Response {
        if let Self::Body(rejection) = &self {
            tracing::debug!(error = %rejection, "rejected settings body");
        }
        (StatusCode::BAD_REQUEST, Json(StatusBody::error(self.to_string()))).into_response()
    }
}
