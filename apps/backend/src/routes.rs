use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorMessage;

pub mod articles;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes).service(
        web::scope("/api/v1")
            .configure(articles::configure_routes)
            .configure(users::configure_routes),
    );
}

/// Default service so unknown routes also answer with the JSON envelope.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(ErrorMessage::RouteNotFound))
}
