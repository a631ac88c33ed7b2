use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use time::Duration;

/// Which booking store implementation to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    Postgres,
    #[default]
    Sqlite,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "sqlite" => Ok(StorageBackend::Sqlite),
            _ => Err(format!(
                "Invalid storage backend: {}. Must be 'postgres' or 'sqlite'",
                s
            )),
        }
    }
}

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Upper bound on waiting for a pooled connection before failing with
    /// `StorageUnavailable`.
    pub db_acquire_timeout_secs: u64,
    /// Roster CSV. Read once and cached until an admin triggers a reload.
    pub roster_path: PathBuf,
    pub jwt_secret: SecretString,
    pub session_ttl: Duration,
    /// How many days ahead of today a booking may be placed or cleared.
    pub booking_window_days: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let storage_backend: StorageBackend =
            get_env_default("STORAGE_BACKEND", StorageBackend::Sqlite);
        let database_url: String = get_env_default(
            "DATABASE_URL",
            "sqlite://database/meals.db?mode=rwc".to_string(),
        );
        let db_max_connections: u32 = get_env_default("DB_MAX_CONNECTIONS", 5);
        let db_acquire_timeout_secs: u64 = get_env_default("DB_ACQUIRE_TIMEOUT_SECS", 5);

        let roster_path: String =
            get_env_default("ROSTER_PATH", "database/employees.csv".to_string());

        let jwt_secret: SecretString = SecretString::new(get_env::<String>("JWT_SECRET").into());
        let session_ttl_hours: i64 = get_env_default("SESSION_TTL_HOURS", 12);
        let booking_window_days: u32 = get_env_default("BOOKING_WINDOW_DAYS", 60);

        Self {
            bind_addr,
            cors_origin,
            storage_backend,
            database_url,
            db_max_connections,
            db_acquire_timeout_secs,
            roster_path: PathBuf::from(roster_path),
            jwt_secret,
            session_ttl: Duration::hours(session_ttl_hours),
            booking_window_days,
        }
    }
}
