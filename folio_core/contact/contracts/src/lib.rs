use std::future::Future;

use folio_models::contact::{ContactField, ContactMessageId, ContactSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Persists a submission after the authoritative presence check.
    ///
    /// A submission is either fully rejected or persisted as exactly one
    /// row; the returned id identifies the new row.
    fn submit(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactMessageId, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("First name, email, and message are required.")]
    MissingFields(Vec<ContactField>),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactMessageId, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }
}
