use crate::{
    adapters::{http::app_state::AppState, roster::CsvRosterSource},
    infra::{booking_repo, config::AppConfig, error::InfraError},
    use_cases::{
        auth::{AuthUseCases, RosterCache},
        booking::BookingUseCases,
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let repo = booking_repo(&config).await?;
    let booking_use_cases = BookingUseCases::new(repo);

    let roster_source = Arc::new(CsvRosterSource::new(config.roster_path.clone()));
    let roster_cache = Arc::new(RosterCache::new(roster_source));
    let auth_use_cases = AuthUseCases::new(roster_cache);

    // Load eagerly so a broken roster stops startup instead of the first login.
    let entries = auth_use_cases
        .reload_roster()
        .await
        .map_err(InfraError::Roster)?;
    info!(entries, path = %config.roster_path.display(), "Roster ready");

    Ok(AppState {
        config: Arc::new(config),
        booking_use_cases: Arc::new(booking_use_cases),
        auth_use_cases: Arc::new(auth_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "meal_booking=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs); skipped if the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
