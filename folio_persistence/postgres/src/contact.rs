use folio_models::contact::{ContactMessageId, ContactSubmission};
use folio_persistence_contracts::contact::ContactRepository;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactRepository;

columns!(contact as "c": "firstname", "lastname", "phone", "email", "message");

impl ContactRepository<PostgresTransaction> for PostgresContactRepository {
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        submission: &ContactSubmission,
    ) -> anyhow::Result<ContactMessageId> {
        txn.txn()
            .query_one(
                &format!(
                    "insert into contact ({CONTACT_COL_NAMES}) values ({}) returning id",
                    arg_indices(1..=CONTACT_CNT)
                ),
                &[
                    &submission.first_name.as_str(),
                    &submission.last_name.as_str(),
                    &submission.phone.as_str(),
                    &submission.email.as_str(),
                    &submission.message.as_str(),
                ],
            )
            .await
            .map(|row| row.get::<_, i64>(0).into())
            .map_err(Into::into)
    }
}
