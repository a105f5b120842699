//! Registration and credential verification.
//!
//! Passwords are stored and compared verbatim, and an unknown login is
//! reported separately from a wrong password.

use std::time::SystemTime;

use tracing::info;

use crate::auth::jwt::mint_access_token;
use crate::errors::domain::{AuthErrorKind, ConflictKind, DomainError, NotFoundKind};
use crate::repos::users::{Credentials, User, UserRepository};
use crate::state::security_config::SecurityConfig;

/// Create the user if no user with this login exists yet.
///
/// Lookup and insert are two statements; a concurrent registration of the same
/// login that slips between them is rejected by the unique index on
/// `users.login` and also comes back as a `Conflict`.
pub async fn register(users: &UserRepository, credentials: Credentials) -> Result<User, DomainError> {
    if users.find_by_login(&credentials.login).await?.is_some() {
        info!(login = %credentials.login, "User with that login already exists");
        return Err(DomainError::conflict(
            ConflictKind::UniqueLogin,
            "User with that login already exists",
        ));
    }

    let user = users.create(credentials).await?;
    info!(user_id = user.id, login = %user.login, "User registered");
    Ok(user)
}

/// Check `credentials` and issue an access token for the login.
pub async fn authenticate(
    users: &UserRepository,
    credentials: &Credentials,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, DomainError> {
    let user = users
        .find_by_login(&credentials.login)
        .await?
        .ok_or_else(|| {
            info!(login = %credentials.login, "User with that login does not exist");
            DomainError::not_found(NotFoundKind::User, "User with that login does not exist")
        })?;

    if user.password != credentials.password {
        info!(login = %credentials.login, "Invalid user credentials");
        return Err(DomainError::auth(
            AuthErrorKind::InvalidCredentials,
            "Invalid user credentials",
        ));
    }

    mint_access_token(&user.login, now, security)
}
