use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

/// Access log for the API.
///
/// Emits one `request_completed` event per call carrying the matched route
/// pattern, so `/api/v1/articles/{id}` aggregates across ids. Levels:
/// - 5xx (storage and signing failures, including the 501s): `error`
/// - 401 from the token gate: `info`, a routine rejection
/// - other 4xx (bad ids, bad json, unknown logins): `warn`
/// - everything else: `info`
pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_string();
        let route = req.match_pattern().unwrap_or_else(|| "<unmatched>".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let status = match &result {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };

            let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
            let status_code = status.as_u16();

            if status.is_server_error() {
                error!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, "request_completed");
            } else if status == StatusCode::UNAUTHORIZED {
                info!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, "request_completed");
            } else if status.is_client_error() {
                warn!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, "request_completed");
            } else {
                info!(http.method = %method, url.path = %path, http.route = %route, http.status_code = status_code, duration_ms, "request_completed");
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App, HttpResponse};

    use super::*;

    #[actix_web::test]
    async fn passes_responses_through_unchanged() {
        let app = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .route("/articles/{id}", web::get().to(|| async { HttpResponse::Accepted().finish() }))
                .route("/fail", web::get().to(|| async { HttpResponse::NotImplemented().finish() })),
        )
        .await;

        let ok = test::call_service(&app, test::TestRequest::get().uri("/articles/7").to_request()).await;
        assert_eq!(ok.status(), StatusCode::ACCEPTED);

        let failed = test::call_service(&app, test::TestRequest::get().uri("/fail").to_request()).await;
        assert_eq!(failed.status(), StatusCode::NOT_IMPLEMENTED);

        let missing = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
