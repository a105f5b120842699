use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::errors::{ConnectionError, ErrorMessage};
use crate::http::envelope::Message;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {message}")]
    BadRequest { message: ErrorMessage },
    #[error("Not found: {message}")]
    NotFound { message: ErrorMessage },
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: ErrorMessage,
        /// Log tag describing why the token was rejected
        reason: &'static str,
    },
    #[error("Internal error: {message}")]
    Internal { message: ErrorMessage },
    #[error("Not implemented: {message}")]
    NotImplemented { message: ErrorMessage },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotImplemented { .. } => StatusCode::NOT_IMPLEMENTED,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the response envelope
    pub fn message(&self) -> ErrorMessage {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Unauthorized { message, .. }
            | AppError::Internal { message }
            | AppError::NotImplemented { message } => *message,
            AppError::Config { .. } => ErrorMessage::StorageRetry,
        }
    }

    pub fn bad_request(message: ErrorMessage) -> Self {
        Self::BadRequest { message }
    }

    pub fn not_found(message: ErrorMessage) -> Self {
        Self::NotFound { message }
    }

    pub fn internal(message: ErrorMessage) -> Self {
        Self::Internal { message }
    }

    pub fn not_implemented(message: ErrorMessage) -> Self {
        Self::NotImplemented { message }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::Unauthorized {
            message: ErrorMessage::MissingBearer,
            reason: "missing_bearer",
        }
    }

    pub fn unauthorized_invalid_signature() -> Self {
        Self::Unauthorized {
            message: ErrorMessage::InvalidToken,
            reason: "invalid_signature",
        }
    }

    pub fn unauthorized_invalid_token() -> Self {
        Self::Unauthorized {
            message: ErrorMessage::InvalidToken,
            reason: "invalid_token",
        }
    }

    pub fn unauthorized_expired_token() -> Self {
        Self::Unauthorized {
            message: ErrorMessage::ExpiredToken,
            reason: "token_expired",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }
}

impl From<ConnectionError> for AppError {
    fn from(e: ConnectionError) -> Self {
        AppError::config(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        Message::error(self.status(), self.message()).into_response()
    }
}
