use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use folio_models::contact::{ContactMessageId, ContactSubmission};
use folio_persistence_contracts::{contact::ContactRepository, Database, Transaction};
use tracing::info;

#[derive(Debug, Clone, Default)]
pub struct ContactFeatureServiceImpl<Db, ContactRepo> {
    db: Db,
    contact_repo: ContactRepo,
}

impl<Db, ContactRepo> ContactFeatureServiceImpl<Db, ContactRepo> {
    pub fn new(db: Db, contact_repo: ContactRepo) -> Self {
        Self { db, contact_repo }
    }
}

impl<Db, ContactRepo> ContactFeatureService for ContactFeatureServiceImpl<Db, ContactRepo>
where
    Db: Database,
    ContactRepo: ContactRepository<Db::Transaction>,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactMessageId, ContactSubmitError> {
        // The client validator is advisory only; this check is the
        // authoritative one. Nothing is persisted when it fails.
        let missing = submission.missing_fields();
        if !missing.is_empty() {
            return Err(ContactSubmitError::MissingFields(missing));
        }

        let mut txn = self.db.begin_transaction().await?;
        let id = self.contact_repo.create(&mut txn, &submission).await?;
        txn.commit().await?;

        info!(id = *id, "contact message saved");

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use folio_demo::contact::{MINIMAL_SUBMISSION, SUBMISSION};
    use folio_models::contact::ContactField;
    use folio_persistence_contracts::{contact::MockContactRepository, MockDatabase, MockTransaction};
    use folio_utils::assert_matches;

    use super::*;

    type Sut = ContactFeatureServiceImpl<MockDatabase, MockContactRepository<MockTransaction>>;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let expected = ContactMessageId::from(17);

        let db = MockDatabase::build(true);
        let contact_repo = MockContactRepository::new().with_create(SUBMISSION.clone(), Ok(expected));

        let sut = ContactFeatureServiceImpl { db, contact_repo };

        // Act
        let result = sut.submit(SUBMISSION.clone()).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn ok_without_optional_fields() {
        // Arrange
        let expected = ContactMessageId::from(18);

        let db = MockDatabase::build(true);
        let contact_repo =
            MockContactRepository::new().with_create(MINIMAL_SUBMISSION.clone(), Ok(expected));

        let sut = ContactFeatureServiceImpl { db, contact_repo };

        // Act: the optional fields stay empty strings all the way down.
        let result = sut.submit(MINIMAL_SUBMISSION.clone()).await;

        // Assert
        assert_eq!(result.unwrap(), expected);
    }

    #[tokio::test]
    async fn missing_fields() {
        // Arrange
        let submission = ContactSubmission {
            first_name: "  ".try_into().unwrap(),
            ..SUBMISSION.clone()
        };

        let sut = Sut::default();

        // Act
        let result = sut.submit(submission).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::MissingFields(fields)) if *fields == [ContactField::FirstName]
        );
    }

    #[tokio::test]
    async fn missing_fields_all() {
        // Arrange
        let sut = Sut::default();

        // Act
        let result = sut.submit(ContactSubmission::default()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::MissingFields(fields))
                if *fields == [ContactField::FirstName, ContactField::Email, ContactField::Message]
        );
    }

    #[tokio::test]
    async fn repo_error() {
        // Arrange
        let db = MockDatabase::build(false);
        let contact_repo = MockContactRepository::new()
            .with_create(SUBMISSION.clone(), Err(anyhow::anyhow!("insert failed")));

        let sut = ContactFeatureServiceImpl { db, contact_repo };

        // Act
        let result = sut.submit(SUBMISSION.clone()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Other(_)));
    }
}
