#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod health;
pub mod http;
pub mod infra;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use auth::jwt::{mint_access_token, verify_access_token, Claims};
pub use config::{AppConfig, StorageConfig};
pub use db::Storage;
pub use error::AppError;
pub use errors::{DomainError, ErrorMessage};
pub use extractors::{ArticleId, ValidatedJson};
pub use http::Message;
pub use infra::db::connect_db;
pub use middleware::{JwtGate, StructuredLogger};
pub use repos::{Article, ArticleRepository, Credentials, NewArticle, User, UserRepository};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
