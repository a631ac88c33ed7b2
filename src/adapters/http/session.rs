use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::jwt,
    domain::entities::identity::UserIdentity,
};

pub const SESSION_COOKIE: &str = "session";

/// Identity held by the caller's session cookie.
pub fn current_identity(jar: &CookieJar, app_state: &AppState) -> AppResult<UserIdentity> {
    let token = jar
        .get(SESSION_COOKIE)
        .ok_or(AppError::InvalidCredentials)?;
    let claims = jwt::verify(token.value(), &app_state.config.jwt_secret)?;
    Ok(claims.into())
}

/// Like [`current_identity`], but only admins get through.
pub fn current_admin(jar: &CookieJar, app_state: &AppState) -> AppResult<UserIdentity> {
    let identity = current_identity(jar, app_state)?;
    if !identity.role.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(identity)
}

pub fn session_cookie(token: String, app_state: &AppState) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(app_state.config.session_ttl)
        .build()
}

pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
