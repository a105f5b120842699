#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, Error};
use article_api::Article;
use backend_test_support::envelope::{parse_envelope, EnvelopeLike};
use serde_json::json;

pub mod proptest_prelude;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Status, headers and body of a response, read once.
pub struct Captured {
    pub status: StatusCode,
    pub headers: actix_web::http::header::HeaderMap,
    pub body: actix_web::web::Bytes,
}

impl Captured {
    pub fn envelope(&self) -> EnvelopeLike {
        parse_envelope(&self.body)
    }
}

pub async fn capture(resp: ServiceResponse<BoxBody>) -> Captured {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    Captured {
        status,
        headers,
        body,
    }
}

pub async fn post_json<S>(app: &S, uri: &str, body: serde_json::Value) -> Captured
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
    capture(test::call_service(app, req).await).await
}

pub async fn get<S>(app: &S, uri: &str, token: Option<&str>) -> Captured
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mut req = test::TestRequest::get().uri(uri);
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    capture(test::call_service(app, req.to_request()).await).await
}

pub async fn delete<S>(app: &S, uri: &str) -> Captured
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let req = test::TestRequest::delete().uri(uri).to_request();
    capture(test::call_service(app, req).await).await
}

pub async fn register<S>(app: &S, login: &str, password: &str) -> Captured
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    post_json(
        app,
        "/api/v1/user/register",
        json!({ "login": login, "password": password }),
    )
    .await
}

pub async fn authenticate<S>(app: &S, login: &str, password: &str) -> Captured
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    post_json(
        app,
        "/api/v1/user/auth",
        json!({ "login": login, "password": password }),
    )
    .await
}

/// Register a fresh user and return a token for it.
pub async fn login_token<S>(app: &S, login: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let reg = register(app, login, "secret").await;
    assert_eq!(reg.status, StatusCode::CREATED);
    let auth = authenticate(app, login, "secret").await;
    assert_eq!(auth.status, StatusCode::CREATED);
    auth.envelope().message
}

pub async fn create_article<S>(app: &S, title: &str, author: &str, content: &str) -> Article
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = post_json(
        app,
        "/api/v1/articles",
        json!({ "title": title, "author": author, "content": content }),
    )
    .await;
    assert_eq!(resp.status, StatusCode::CREATED);
    serde_json::from_slice(&resp.body).expect("create should return the stored article")
}
