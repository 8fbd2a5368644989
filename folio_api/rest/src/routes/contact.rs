use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response, routing, Form, Router};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::message;
use crate::models::contact::ApiContactSubmission;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(
    service: State<Arc<impl ContactFeatureService>>,
    Form(submission): Form<ApiContactSubmission>,
) -> Response {
    match service.submit(submission.into()).await {
        Ok(_) => message(
            StatusCode::OK,
            "Thank you!",
            "I'll get back to you shortly!",
        ),
        Err(ContactSubmitError::MissingFields(_)) => message(
            StatusCode::BAD_REQUEST,
            "Error",
            "First name, email, and message are required",
        ),
        Err(ContactSubmitError::Other(err)) => {
            tracing::error!("failed to save contact message: {err}");
            message(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error",
                "Sorry, there was an error saving your message. Please try again.",
            )
        }
    }
}
