use folio_core_health_contracts::{HealthFeatureService, HealthStatus};
use folio_persistence_contracts::Database;
use tracing::error;

#[derive(Debug, Clone, Default)]
pub struct HealthFeatureServiceImpl<Db> {
    db: Db,
}

impl<Db> HealthFeatureServiceImpl<Db> {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl<Db> HealthFeatureService for HealthFeatureServiceImpl<Db>
where
    Db: Database,
{
    async fn get_status(&self) -> HealthStatus {
        let database = self
            .db
            .ping()
            .await
            .inspect_err(|err| error!("Failed to ping database: {err}"))
            .is_ok();

        HealthStatus { database }
    }
}

#[cfg(test)]
mod tests {
    use folio_persistence_contracts::MockDatabase;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let mut db = MockDatabase::new();
        db.expect_ping()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(()))));

        let sut = HealthFeatureServiceImpl { db };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: true });
    }

    #[tokio::test]
    async fn database_down() {
        // Arrange
        let mut db = MockDatabase::new();
        db.expect_ping().once().return_once(|| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "connection refused"
            ))))
        });

        let sut = HealthFeatureServiceImpl { db };

        // Act
        let result = sut.get_status().await;

        // Assert
        assert_eq!(result, HealthStatus { database: false });
    }
}
