//! SeaORM -> DomainError translation helpers.
//!
//! Repositories convert `sea_orm::DbErr` into `DomainError` here; handlers then
//! choose the HTTP status per operation.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, StorageErrorKind};

/// Map a unique-violation message to a domain conflict.
///
/// SQLite reports `UNIQUE constraint failed: users.login`, PostgreSQL names the
/// constraint `users_login_key`.
fn map_unique_violation(detail: &str) -> DomainError {
    if detail.contains("users.login") || detail.contains("users_login_key") {
        return DomainError::conflict(
            ConflictKind::UniqueLogin,
            "User with that login already exists",
        );
    }
    DomainError::conflict(
        ConflictKind::Other("Unique".into()),
        "Unique constraint violation",
    )
}

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: DbErr) -> DomainError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = e.sql_err() {
        warn!(raw_error = %detail, "Unique constraint violation");
        return map_unique_violation(&detail);
    }

    match &e {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(raw_error = %e, "Database unavailable");
            DomainError::storage(StorageErrorKind::Unavailable, "Database unavailable")
        }
        _ => {
            error!(raw_error = %e, "Database error");
            DomainError::storage(StorageErrorKind::Query, e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::RuntimeErr;

    use super::*;

    #[test]
    fn connection_errors_are_unavailable() {
        let err = map_db_err(DbErr::Conn(RuntimeErr::Internal("refused".into())));
        assert_eq!(
            err,
            DomainError::storage(StorageErrorKind::Unavailable, "Database unavailable")
        );
    }

    #[test]
    fn other_errors_are_query_failures() {
        let err = map_db_err(DbErr::Custom("boom".into()));
        assert!(matches!(
            err,
            DomainError::Storage(StorageErrorKind::Query, ref d) if d.contains("boom")
        ));
    }

    #[test]
    fn unique_login_messages_map_to_conflict() {
        for detail in [
            "UNIQUE constraint failed: users.login",
            "duplicate key value violates unique constraint \"users_login_key\"",
        ] {
            assert!(matches!(
                map_unique_violation(detail),
                DomainError::Conflict(ConflictKind::UniqueLogin, _)
            ));
        }
        assert!(matches!(
            map_unique_violation("UNIQUE constraint failed: other.col"),
            DomainError::Conflict(ConflictKind::Other(_), _)
        ));
    }
}
