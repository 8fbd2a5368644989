use folio_config::Config;
use folio_persistence_contracts::Database;
use tracing::info;

use crate::{database, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying store schema");
    database.setup().await?;

    let server = environment::rest_server(&config, database);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
