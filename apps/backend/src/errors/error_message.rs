//! Client-facing error messages.
//!
//! Every error envelope the API emits takes its `message` from this enum.
//! Add new messages here; never pass ad-hoc strings to `AppError`.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMessage {
    // Request validation
    /// `{id}` path segment is not an integer
    InvalidId,
    /// Request body did not decode into the expected shape
    InvalidJson,
    /// Authentication body did not decode
    InvalidJsonData,

    // Lookups
    ArticleNotFound,
    LoginNotFound,

    // Credentials
    LoginAlreadyExists,
    InvalidCredentials,

    // Authorization gate
    MissingBearer,
    InvalidToken,
    ExpiredToken,

    // Storage and internal failures
    /// Used by list, which reports 501
    StorageUnavailable,
    /// Used by create, which reports 501
    StorageCreate,
    /// Used by lookups, delete and registration
    StorageRetry,
    /// Used by authentication failures on the server side
    InternalRetry,
    /// Unknown route
    RouteNotFound,
}

impl ErrorMessage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidId => "Unapropriate id value. Don't use ID as uncasting to int value",
            Self::InvalidJson => "Provided json is invalid",
            Self::InvalidJsonData => "Provided json data is invalid",
            Self::ArticleNotFound => "Article with that ID does not exist",
            Self::LoginNotFound => "User with that login does not exist",
            Self::LoginAlreadyExists => "User with that login already exists",
            Self::InvalidCredentials => "Invalid user credentials",
            Self::MissingBearer => "Missing or malformed Bearer token",
            Self::InvalidToken => "Invalid token",
            Self::ExpiredToken => "Token expired",
            Self::StorageUnavailable => "Internal server error occurred. Try again later",
            Self::StorageCreate => "We have some troulbe accessing database. Try again later. ",
            Self::StorageRetry => "Internal server error occurred. Please, try again later",
            Self::InternalRetry => "Internal server error. Please try again later",
            Self::RouteNotFound => "Requested resource does not exist",
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
