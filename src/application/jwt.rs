use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::identity::{Role, UserIdentity};

/// Session claims. The token is the whole session: logging out drops the cookie
/// and nothing is revoked server-side.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // email
    pub name: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl From<SessionClaims> for UserIdentity {
    fn from(claims: SessionClaims) -> Self {
        UserIdentity {
            email: claims.sub,
            display_name: claims.name,
            role: claims.role,
        }
    }
}

pub fn issue(
    identity: &UserIdentity,
    secret: &secrecy::SecretString,
    ttl: Duration,
) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let exp = now + ttl.whole_seconds();
    let claims = SessionClaims {
        sub: identity.email.clone(),
        name: identity.display_name.clone(),
        role: identity.role,
        iat: now,
        exp,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn verify(token: &str, secret: &secrecy::SecretString) -> AppResult<SessionClaims> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidCredentials)
}
