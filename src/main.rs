//! BizTime server binary

use anyhow::Result;
use biztime::config::{BizTimeConfig, StorageBackend};
use biztime::server::ServerBuilder;
use biztime::storage::InMemoryStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("biztime=info,tower_http=info")),
        )
        .init();

    let config = BizTimeConfig::load()?;
    let addr = config.server.addr();

    tracing::info!(
        environment = ?config.environment,
        storage = ?config.storage,
        "Starting biztime v{}",
        env!("CARGO_PKG_VERSION")
    );

    let builder = match config.storage {
        StorageBackend::InMemory => ServerBuilder::new().with_store(InMemoryStore::new()),
        StorageBackend::Postgres => postgres_builder(&config).await?,
    };

    builder.serve(&addr).await
}

#[cfg(feature = "postgres")]
async fn postgres_builder(config: &BizTimeConfig) -> Result<ServerBuilder> {
    use biztime::storage::{PostgresStore, postgres};

    let database = config.database_name();
    let pool = postgres::connect(&config.database, database).await?;
    postgres::ensure_schema(&pool).await?;
    tracing::info!(%database, "Connected to PostgreSQL");

    Ok(ServerBuilder::new().with_store(PostgresStore::new(pool)))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_builder(_config: &BizTimeConfig) -> Result<ServerBuilder> {
    anyhow::bail!("storage 'postgres' requires building with the `postgres` feature")
}
