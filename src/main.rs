use anyhow::{Context, Result};
use attribute_service::server::{AppState, Server};
use attribute_service::shared::utils::init_logger;
use attribute_service::shared::{AppConfig, StorageBackend};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let config = AppConfig::from_env().context("Configuration is invalid")?;
    let address = config.socket_addr().await?;

    let state = match config.storage {
        StorageBackend::Memory => {
            info!("Using in-memory storage");
            AppState::in_memory()
        }
        StorageBackend::Postgres => postgres_state(&config).await?,
    };

    Server::new(address, state).run().await
}

#[cfg(feature = "postgres")]
async fn postgres_state(config: &AppConfig) -> Result<AppState> {
    use attribute_service::shared::infrastructure::Database;
    use std::sync::Arc;

    let db_config = config
        .database
        .clone()
        .context("DATABASE_URL is required when STORAGE_BACKEND=postgres")?;

    let db = tokio::task::spawn_blocking(move || -> Result<Database> {
        let db = Database::new(&db_config)?;
        db.run_migrations()?;
        Ok(db)
    })
    .await
    .context("Database initialisation task panicked")??;

    info!("Using PostgreSQL storage");
    Ok(AppState::postgres(Arc::new(db)))
}

#[cfg(not(feature = "postgres"))]
async fn postgres_state(_config: &AppConfig) -> Result<AppState> {
    Err(attribute_service::shared::AppError::ConfigurationError(
        "STORAGE_BACKEND=postgres requires building with the `postgres` feature".to_string(),
    )
    .into())
}
