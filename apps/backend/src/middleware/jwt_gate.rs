//! Bearer token gate
//!
//! Validates the `Authorization: Bearer <token>` header before the wrapped
//! service runs. Any failure short-circuits with a 401 envelope and the
//! wrapped handler is never called. On success the verified `Claims` are
//! stored in request extensions.

use std::future::{ready, Ready};

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use tracing::{debug, error};

use crate::auth::jwt::verify_access_token;
use crate::error::AppError;
use crate::errors::ErrorMessage;
use crate::state::app_state::AppState;

pub struct JwtGate;

impl<S, B> Transform<S, ServiceRequest> for JwtGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtGateMiddleware { service }))
    }
}

pub struct JwtGateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for JwtGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = match extract_bearer(req.headers().get(header::AUTHORIZATION)) {
            Ok(token) => token,
            Err(err) => return reject(req, err),
        };

        let Some(app_state) = req.app_data::<web::Data<AppState>>().cloned() else {
            error!("AppState not available to the token gate");
            return reject(req, AppError::internal(ErrorMessage::InternalRetry));
        };

        match verify_access_token(&token, &app_state.security) {
            Ok(claims) => {
                debug!(login = %claims.name, "bearer token accepted");
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(err) => reject(req, err),
        }
    }
}

/// Answer with the error envelope; the wrapped service is never called.
fn reject<B: 'static>(
    req: ServiceRequest,
    err: AppError,
) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
    if let AppError::Unauthorized { reason, .. } = &err {
        debug!(reason = %reason, "bearer token rejected");
    }
    let response = req.into_response(err.error_response()).map_into_right_body();
    Box::pin(async move { Ok(response) })
}

fn extract_bearer(header_value: Option<&HeaderValue>) -> Result<String, AppError> {
    let auth_str = header_value
        .ok_or_else(AppError::unauthorized_missing_bearer)?
        .to_str()
        .map_err(|_| AppError::unauthorized_missing_bearer())?;

    let parts: Vec<&str> = auth_str.split_whitespace().collect();
    if parts.len() != 2 || !parts[0].eq_ignore_ascii_case("Bearer") || parts[1].is_empty() {
        return Err(AppError::unauthorized_missing_bearer());
    }

    Ok(parts[1].to_string())
}
