use std::sync::Arc;

use tracing::info;

use crate::{
    adapters::persistence::{PostgresPersistence, SqlitePersistence},
    application::use_cases::booking::BookingRepo,
    infra::{
        config::{AppConfig, StorageBackend},
        db::{init_postgres, init_sqlite},
        error::InfraError,
    },
};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod setup;

/// Open the configured backend and make sure `meal_orders` exists.
///
/// The rest of the application only ever sees the `BookingRepo` trait.
pub async fn booking_repo(config: &AppConfig) -> Result<Arc<dyn BookingRepo>, InfraError> {
    info!(backend = %config.storage_backend, "Initializing booking store");

    match config.storage_backend {
        StorageBackend::Postgres => {
            let pool = init_postgres(
                &config.database_url,
                config.db_max_connections,
                config.db_acquire_timeout_secs,
            )
            .await?;
            let persistence = PostgresPersistence::new(pool);
            persistence.ensure_schema().await.map_err(InfraError::Schema)?;
            Ok(Arc::new(persistence))
        }
        StorageBackend::Sqlite => {
            let pool = init_sqlite(
                &config.database_url,
                config.db_max_connections,
                config.db_acquire_timeout_secs,
            )
            .await?;
            let persistence = SqlitePersistence::new(pool);
            persistence.ensure_schema().await.map_err(InfraError::Schema)?;
            Ok(Arc::new(persistence))
        }
    }
}
