//! Error handling for the article service.

pub mod connection;
pub mod domain;
pub mod error_message;

pub use connection::ConnectionError;
pub use domain::DomainError;
pub use error_message::ErrorMessage;
