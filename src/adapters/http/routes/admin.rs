use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::{
    adapters::http::{app_state::AppState, session::current_admin},
    app_error::AppResult,
    domain::entities::booking::MealSummary,
};

#[derive(Serialize)]
struct RosterReloadResponse {
    entries: usize,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary/{date}", get(summary))
        .route("/roster/reload", post(reload_roster))
}

async fn summary(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(meal_date): Path<NaiveDate>,
) -> AppResult<Json<MealSummary>> {
    current_admin(&jar, &app_state)?;
    let summary = app_state.booking_use_cases.summary(meal_date).await?;
    Ok(Json(summary))
}

async fn reload_roster(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Json<RosterReloadResponse>> {
    let admin = current_admin(&jar, &app_state)?;
    let entries = app_state.auth_use_cases.reload_roster().await?;
    info!(by = %admin.email, entries, "Roster reloaded");
    Ok(Json(RosterReloadResponse { entries }))
}
