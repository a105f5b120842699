//! Domain-level error type used across services and repositories.
//!
//! This error type is HTTP- and DB-agnostic. Handlers decide the status code
//! for each kind per operation and convert to `crate::error::AppError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Storage failure kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// The store could not be reached or a pooled connection was unavailable
    Unavailable,
    /// The statement reached the store and failed there
    Query,
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    User,
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    UniqueLogin,
    Other(String),
}

/// Domain-level authentication failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthErrorKind {
    /// Stored password does not match the submitted one
    InvalidCredentials,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Credential verification failed
    Auth(AuthErrorKind, String),
    /// Query or connection failure
    Storage(StorageErrorKind, String),
    /// Failure inside the service itself (e.g. token signing)
    Internal(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Auth(kind, d) => write!(f, "auth {kind:?}: {d}"),
            DomainError::Storage(kind, d) => write!(f, "storage {kind:?}: {d}"),
            DomainError::Internal(d) => write!(f, "internal error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn auth(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self::Auth(kind, detail.into())
    }
    pub fn storage(kind: StorageErrorKind, detail: impl Into<String>) -> Self {
        Self::Storage(kind, detail.into())
    }
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }

    pub fn is_storage(&self) -> bool {
        matches!(self, DomainError::Storage(..))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_detail() {
        let err = DomainError::conflict(ConflictKind::UniqueLogin, "login taken");
        assert_eq!(err.to_string(), "conflict UniqueLogin: login taken");

        let err = DomainError::storage(StorageErrorKind::Query, "syntax error");
        assert_eq!(err.to_string(), "storage Query: syntax error");
        assert!(err.is_storage());
    }
}
