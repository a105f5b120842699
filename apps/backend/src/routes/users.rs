use std::time::SystemTime;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tracing::{error, info};

use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::errors::ErrorMessage;
use crate::extractors::ValidatedJson;
use crate::http::envelope::Message;
use crate::repos::Credentials;
use crate::services::users as user_service;
use crate::state::app_state::AppState;

fn register_error(e: DomainError) -> AppError {
    match e {
        DomainError::Conflict(..) => AppError::bad_request(ErrorMessage::LoginAlreadyExists),
        other => {
            info!(error = %other, "Trouble while registering user");
            AppError::internal(ErrorMessage::StorageRetry)
        }
    }
}

fn authenticate_error(e: DomainError) -> AppError {
    match e {
        DomainError::NotFound(..) => AppError::bad_request(ErrorMessage::LoginNotFound),
        DomainError::Auth(..) => AppError::not_found(ErrorMessage::InvalidCredentials),
        DomainError::Internal(detail) => {
            error!(detail = %detail, "Can not claim jwt-token");
            AppError::internal(ErrorMessage::InternalRetry)
        }
        other => {
            info!(error = %other, "Can not make user search query to database");
            AppError::internal(ErrorMessage::InternalRetry)
        }
    }
}

/// POST /api/v1/user/register
async fn register(
    state: web::Data<AppState>,
    body: ValidatedJson<Credentials>,
) -> Result<HttpResponse, AppError> {
    info!("Post User Register POST /api/v1/user/register");

    let user = user_service::register(state.storage.user(), body.into_inner())
        .await
        .map_err(register_error)?;

    Ok(Message::confirmation(
        StatusCode::CREATED,
        format!("User {{login:{}}} successfully registered", user.login),
    )
    .into_response())
}

/// POST /api/v1/user/auth
async fn authenticate(
    state: web::Data<AppState>,
    body: Result<ValidatedJson<Credentials>, AppError>,
) -> Result<HttpResponse, AppError> {
    info!("Post to Auth POST /api/v1/user/auth");
    let body = body.map_err(|_| {
        info!("Trouble while decoding user data");
        AppError::bad_request(ErrorMessage::InvalidJsonData)
    })?;

    let token = user_service::authenticate(
        state.storage.user(),
        &body,
        SystemTime::now(),
        &state.security,
    )
    .await
    .map_err(authenticate_error)?;

    Ok(Message::confirmation(StatusCode::CREATED, token).into_response())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/user/register", web::post().to(register))
        .route("/user/auth", web::post().to(authenticate));
}
