use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiStatus, ApiValidationError};

pub mod contact_page;
pub mod message;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiError { detail })).into_response()
}

fn validation_error(field_errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiValidationError::new(field_errors)),
    )
        .into_response()
}

/// Fallback for unsupported methods on the submission path. Runs before any
/// validation; the body mirrors the status code.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiStatus { status: 405 }),
    )
        .into_response()
}
