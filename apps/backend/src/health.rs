use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tracing::warn;

use crate::error::AppError;
use crate::errors::ErrorMessage;
use crate::http::envelope::Message;
use crate::state::app_state::AppState;

/// Liveness: the store answers a ping.
async fn health(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.storage.ping().await.map_err(|e| {
        warn!(error = %e, "health check failed");
        AppError::internal(ErrorMessage::StorageRetry)
    })?;
    Ok(Message::confirmation(StatusCode::OK, "ok").into_response())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
