//! Uniform JSON response envelope.
//!
//! Error and confirmation responses are `{status_code, message, is_error}`;
//! successful entity responses carry the raw entity or list instead. Every
//! response is declared as `application/json`.

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::errors::ErrorMessage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub status_code: u16,
    pub message: String,
    pub is_error: bool,
}

impl Message {
    pub fn confirmation(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(status: StatusCode, message: ErrorMessage) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.as_str().to_string(),
            is_error: true,
        }
    }

    /// Render this envelope with its own status code.
    pub fn into_response(self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        respond(status, &self)
    }
}

/// Encode `value` as the JSON body of a response with the given status.
///
/// An encoding failure is logged and degrades to a 500 envelope for this call
/// only.
pub fn respond<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> HttpResponse {
    match serde_json::to_vec(value) {
        Ok(body) => HttpResponse::build(status)
            .content_type(ContentType::json())
            .body(body),
        Err(e) => {
            error!(error = %e, http.status_code = status.as_u16(), "Error while encoding message");
            encoding_failure()
        }
    }
}

fn encoding_failure() -> HttpResponse {
    // Hand-written so this path cannot fail again.
    let body = format!(
        r#"{{"status_code":500,"message":"{}","is_error":true}}"#,
        ErrorMessage::StorageRetry.as_str()
    );
    HttpResponse::InternalServerError()
        .content_type(ContentType::json())
        .body(body)
}
