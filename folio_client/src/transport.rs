use std::future::Future;

use serde::Deserialize;
use tracing::warn;

use crate::{http::HttpClient, validate::FormFields};

/// Marker header distinguishing programmatic submissions from full-page
/// form posts. Sent on every request, not enforced by the server.
pub const REQUEST_MARKER_HEADER: &str = "X-Requested-With";
pub const REQUEST_MARKER_VALUE: &str = "XMLHttpRequest";

/// Issues exactly one submission request per call and maps the outcome
/// into the panel to render. Never retries.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SubmissionTransport: Send + Sync + 'static {
    fn submit(&self, fields: &FormFields) -> impl Future<Output = Panel> + Send;
}

/// A status panel shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Success,
    Failure,
}

impl Panel {
    /// The fixed panel shown when the server could not be reached or its
    /// response could not be parsed.
    pub fn generic_failure() -> Self {
        Self {
            kind: PanelKind::Failure,
            title: "Error".into(),
            body: "An error occurred. Please try again.".into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpSubmissionTransport {
    client: HttpClient,
    config: SubmissionTransportConfig,
}

#[derive(Debug, Clone)]
pub struct SubmissionTransportConfig {
    /// Absolute URL of the submission endpoint.
    pub target: String,
}

impl HttpSubmissionTransport {
    pub fn new(config: SubmissionTransportConfig) -> Self {
        Self {
            client: HttpClient::default(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    title: String,
    body: String,
}

impl SubmissionTransport for HttpSubmissionTransport {
    async fn submit(&self, fields: &FormFields) -> Panel {
        let form = [
            ("firstName", fields.first_name.as_str()),
            ("lastName", fields.last_name.as_str()),
            ("phone", fields.phone.as_str()),
            ("email", fields.email.as_str()),
            ("message", fields.message.as_str()),
        ];

        let response = self
            .client
            .post(&self.config.target)
            .header(REQUEST_MARKER_HEADER, REQUEST_MARKER_VALUE)
            .form(&form)
            .send()
            .await;

        match response {
            Ok(response) => {
                let success = response.status().is_success();
                panel_from_response(success, response.json().await.ok())
            }
            Err(err) => {
                warn!("contact submission failed: {err}");
                Panel::generic_failure()
            }
        }
    }
}

fn panel_from_response(success: bool, message: Option<MessageResponse>) -> Panel {
    match message {
        Some(message) => Panel {
            kind: if success {
                PanelKind::Success
            } else {
                PanelKind::Failure
            },
            title: message.title,
            body: message.body,
        },
        // A response that is not `{title, body}` JSON renders the generic
        // failure panel even when the status was a success.
        None => Panel::generic_failure(),
    }
}
