use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorMessage;

/// Article id taken from the `{id}` path segment.
///
/// Anything that does not parse as a 64-bit integer is a 400 before any
/// repository call is made. Existence is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        raw.parse::<i64>().map(ArticleId).map_err(|e| {
            info!(raw = %raw, error = %e, "Troubles while parsing {{id}} param");
            AppError::bad_request(ErrorMessage::InvalidId)
        })
    }

    /// The stored key, or `None` when no row can carry this id.
    pub fn key(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }
}

impl FromRequest for ArticleId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => ArticleId::parse(raw),
            None => Err(AppError::bad_request(ErrorMessage::InvalidId)),
        };
        ready(result)
    }
}
