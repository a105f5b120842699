use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Lifetime of an issued access token.
pub const TOKEN_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Claims included in issued access tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Login of the authenticated user
    pub name: String,
    /// Privilege flag; every authenticated user receives it
    pub admin: bool,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Mint a signed access token for `login` valid for [`TOKEN_TTL`] from `now`.
pub fn mint_access_token(
    login: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, DomainError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| DomainError::internal("Failed to get current time"))?
        .as_secs() as i64;

    let claims = Claims {
        name: login.to_string(),
        admin: true,
        iat,
        exp: iat + TOKEN_TTL.as_secs() as i64,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| DomainError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry and return the claims.
///
/// Errors (all 401):
/// - Expired token → `AppError::unauthorized_expired_token()`
/// - Invalid signature → `AppError::unauthorized_invalid_signature()`
/// - Any other decode error → `AppError::unauthorized_invalid_token()`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Claims, AppError> {
    // Pin the configured algorithm; expiry is exact, no clock-skew leeway.
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_token(),
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::unauthorized_invalid_signature()
        }
        _ => AppError::unauthorized_invalid_token(),
    })
}
