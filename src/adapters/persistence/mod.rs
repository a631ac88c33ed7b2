use sqlx::{PgPool, SqlitePool};

use crate::app_error::{AppError, AppResult};

pub mod booking;

#[derive(Clone)]
pub struct PostgresPersistence {
    pool: PgPool,
}

impl PostgresPersistence {
    pub fn new(pool: PgPool) -> Self {
        PostgresPersistence { pool }
    }

    /// Create `meal_orders` if missing. Safe to call on every startup.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS meal_orders (
                email TEXT NOT NULL,
                meal_date DATE NOT NULL,
                opted BOOLEAN NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
                PRIMARY KEY (email, meal_date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct SqlitePersistence {
    pool: SqlitePool,
}

impl SqlitePersistence {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePersistence { pool }
    }

    #[cfg(test)]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create `meal_orders` if missing. Safe to call on every startup.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS meal_orders (
                email TEXT NOT NULL,
                meal_date DATE NOT NULL,
                opted BOOLEAN NOT NULL,
                created_at DATETIME NOT NULL,
                PRIMARY KEY (email, meal_date)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::TypeNotFound { .. } => {
                tracing::error!(error = ?err, "Failed to decode booking row");
                AppError::Internal("Unexpected row shape in meal_orders".into())
            }
            _ => {
                // Log the actual error for debugging, but don't expose details
                tracing::error!(error = ?err, "Storage error");
                AppError::StorageUnavailable("Booking store operation failed".into())
            }
        }
    }
}
