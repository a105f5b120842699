use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::StorageConfig;
use crate::errors::ConnectionError;

/// Open a pooled connection for the configured URL.
///
/// No retry: a failure here is fatal to startup. Liveness and schema are
/// checked by the caller.
pub async fn connect_db(config: &StorageConfig) -> Result<DatabaseConnection, ConnectionError> {
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .map_err(|source| ConnectionError::Connect {
            url: config.redacted_url(),
            source,
        })?;

    info!(
        db.url = %config.redacted_url(),
        db.backend = ?conn.get_database_backend(),
        db.max_connections = config.max_connections,
        "database pool created"
    );
    Ok(conn)
}
