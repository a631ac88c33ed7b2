use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::info;

use crate::{
    adapters::http::{
        app_state::AppState,
        session::{cleared_session_cookie, current_identity, session_cookie},
    },
    app_error::{AppError, AppResult},
    application::jwt,
    domain::entities::identity::UserIdentity,
};

#[derive(Deserialize)]
struct LoginPayload {
    email: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(me))
}

async fn login(
    State(app_state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginPayload>,
) -> AppResult<(CookieJar, Json<UserIdentity>)> {
    // Any string is looked up; the roster is the only allow-list.
    let identity = app_state
        .auth_use_cases
        .authenticate(&payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let token = jwt::issue(
        &identity,
        &app_state.config.jwt_secret,
        app_state.config.session_ttl,
    )?;
    info!(email = %identity.email, role = %identity.role, "Logged in");

    Ok((jar.add(session_cookie(token, &app_state)), Json(identity)))
}

async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (jar.remove(cleared_session_cookie()), StatusCode::NO_CONTENT)
}

async fn me(State(app_state): State<AppState>, jar: CookieJar) -> AppResult<Json<UserIdentity>> {
    Ok(Json(current_identity(&jar, &app_state)?))
}
