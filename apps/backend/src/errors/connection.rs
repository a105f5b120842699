//! Failures establishing or releasing the store connection.
//!
//! These are fatal at startup and shutdown; they never reach a request.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        /// Database URL with credentials redacted
        url: String,
        #[source]
        source: sea_orm::DbErr,
    },
    #[error("database did not answer ping: {0}")]
    Ping(#[source] sea_orm::DbErr),
    #[error("failed to prepare schema: {0}")]
    Schema(#[source] sea_orm::DbErr),
    #[error("failed to close database connection: {0}")]
    Close(#[source] sea_orm::DbErr),
}
