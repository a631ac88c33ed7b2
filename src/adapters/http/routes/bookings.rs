use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::{app_state::AppState, session::current_identity},
    app_error::{AppError, AppResult},
    application::validators::is_within_booking_window,
    domain::entities::booking::BookingDay,
};

#[derive(Deserialize)]
struct ChoicePayload {
    opted: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingResponse {
    meal_date: NaiveDate,
    /// `None` when the user has not chosen anything for this date.
    opted: Option<bool>,
}

#[derive(Serialize)]
struct BookingsResponse {
    items: Vec<BookingDay>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_upcoming)).route(
        "/{date}",
        get(get_booking).put(set_choice).delete(clear_choice),
    )
}

async fn list_upcoming(
    State(app_state): State<AppState>,
    jar: CookieJar,
) -> AppResult<Json<BookingsResponse>> {
    let identity = current_identity(&jar, &app_state)?;
    let items = app_state
        .booking_use_cases
        .list_upcoming(&identity.email, today())
        .await?;
    Ok(Json(BookingsResponse { items }))
}

async fn get_booking(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(meal_date): Path<NaiveDate>,
) -> AppResult<Json<BookingResponse>> {
    let identity = current_identity(&jar, &app_state)?;
    let opted = app_state
        .booking_use_cases
        .get_booking(&identity.email, meal_date)
        .await?;
    Ok(Json(BookingResponse { meal_date, opted }))
}

async fn set_choice(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(meal_date): Path<NaiveDate>,
    Json(payload): Json<ChoicePayload>,
) -> AppResult<Json<BookingResponse>> {
    let identity = current_identity(&jar, &app_state)?;
    check_window(meal_date, &app_state)?;

    app_state
        .booking_use_cases
        .upsert(&identity.email, meal_date, payload.opted)
        .await?;

    Ok(Json(BookingResponse {
        meal_date,
        opted: Some(payload.opted),
    }))
}

async fn clear_choice(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Path(meal_date): Path<NaiveDate>,
) -> AppResult<StatusCode> {
    let identity = current_identity(&jar, &app_state)?;
    check_window(meal_date, &app_state)?;

    app_state
        .booking_use_cases
        .delete_booking(&identity.email, meal_date)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn check_window(meal_date: NaiveDate, app_state: &AppState) -> AppResult<()> {
    let window = app_state.config.booking_window_days;
    if !is_within_booking_window(meal_date, today(), window) {
        return Err(AppError::InvalidInput(format!(
            "Bookings can only be changed from today up to {} days ahead",
            window
        )));
    }
    Ok(())
}
