//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` creates a minimal `AppState` over an in-memory booking
//! store and a static roster.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum_extra::extract::cookie::Cookie;
use secrecy::SecretString;
use time::Duration;

use crate::{
    adapters::http::{app_state::AppState, session::session_cookie},
    application::{
        jwt,
        use_cases::{
            auth::{AuthUseCases, RosterCache},
            booking::BookingUseCases,
        },
    },
    domain::entities::{identity::Role, roster::RosterRow},
    infra::config::{AppConfig, StorageBackend},
    test_utils::{InMemoryBookingRepo, StaticRosterSource, create_test_identity},
};

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        storage_backend: StorageBackend::Sqlite,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_acquire_timeout_secs: 1,
        roster_path: "employees.csv".into(),
        jwt_secret: SecretString::new("test-jwt-secret".into()),
        session_ttl: Duration::hours(1),
        booking_window_days: 60,
    }
}

#[derive(Default)]
pub struct TestAppStateBuilder {
    employees: Vec<RosterRow>,
    storage_unavailable: bool,
    booking_window_days: Option<u32>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employee(mut self, email: &str, user_id: &str, name: &str) -> Self {
        self.employees.push(RosterRow {
            email: email.to_string(),
            user_id: user_id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn with_unavailable_storage(mut self) -> Self {
        self.storage_unavailable = true;
        self
    }

    pub fn with_booking_window_days(mut self, days: u32) -> Self {
        self.booking_window_days = Some(days);
        self
    }

    pub fn build(self) -> AppState {
        let repo = Arc::new(InMemoryBookingRepo::new());
        repo.set_unavailable(self.storage_unavailable);

        let roster = Arc::new(RosterCache::new(Arc::new(StaticRosterSource::new(
            self.employees,
        ))));

        let mut config = test_config();
        if let Some(days) = self.booking_window_days {
            config.booking_window_days = days;
        }

        AppState {
            config: Arc::new(config),
            booking_use_cases: Arc::new(BookingUseCases::new(repo)),
            auth_use_cases: Arc::new(AuthUseCases::new(roster)),
        }
    }
}

fn cookie_for(app_state: &AppState, email: &str, role: Role) -> Cookie<'static> {
    let identity = create_test_identity(|i| {
        i.email = email.to_string();
        i.role = role;
    });
    let token = jwt::issue(
        &identity,
        &app_state.config.jwt_secret,
        app_state.config.session_ttl,
    )
    .unwrap();
    session_cookie(token, app_state)
}

/// Session cookie for a regular user.
pub fn session_cookie_for(app_state: &AppState, email: &str) -> Cookie<'static> {
    cookie_for(app_state, email, Role::User)
}

/// Session cookie for an admin.
pub fn admin_session_cookie_for(app_state: &AppState, email: &str) -> Cookie<'static> {
    cookie_for(app_state, email, Role::Admin)
}
