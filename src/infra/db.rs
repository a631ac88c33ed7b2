use std::str::FromStr;
use std::time::Duration;

use sqlx::{
    PgPool, SqlitePool,
    postgres::PgPoolOptions,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::infra::error::InfraError;

pub async fn init_postgres(
    database_url: &str,
    max_connections: u32,
    acquire_timeout_secs: u64,
) -> Result<PgPool, InfraError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
        .connect(database_url)
        .await
        .map_err(InfraError::DatabaseConnection)?;

    info!("Connected to Postgres");
    Ok(pool)
}

pub async fn init_sqlite(
    database_url: &str,
    max_connections: u32,
    acquire_timeout_secs: u64,
) -> Result<SqlitePool, InfraError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(InfraError::DatabaseConnection)?
        .create_if_missing(true);

    // SQLite creates the file but not its directory.
    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| InfraError::DatabaseConnection(sqlx::Error::Io(e)))?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(acquire_timeout_secs))
        .connect_with(options)
        .await
        .map_err(InfraError::DatabaseConnection)?;

    info!("Opened SQLite database");
    Ok(pool)
}
