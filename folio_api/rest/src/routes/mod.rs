use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiMessage;

pub mod blog;
pub mod contact;
pub mod health;
pub mod pages;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err}");
    message(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Error",
        "An unexpected error occurred. Please try again.",
    )
}

/// Every non-page response carries the `{title, body}` shape the
/// submission scripts render into their status panels.
fn message(code: StatusCode, title: &'static str, body: &'static str) -> Response {
    (code, Json(ApiMessage { title, body })).into_response()
}
