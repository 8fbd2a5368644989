use std::future::Future;

use folio_models::contact::{ContactMessageId, ContactSubmission};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Persists a submission as one new row and returns the assigned id.
    ///
    /// Insert-only: persisted rows are never read back, updated or deleted
    /// through this repository.
    fn create(
        &self,
        txn: &mut Txn,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<ContactMessageId>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_create(
        mut self,
        submission: ContactSubmission,
        result: anyhow::Result<ContactMessageId>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
