//! Connection manager owning the database handle and its repositories.
//!
//! A `Storage` only exists after `open` succeeded, and `close` consumes it,
//! so no repository can be reached before open or after close. Each
//! repository is built on first use and cached for the lifetime of this
//! connection; it is dropped together with it.

use once_cell::sync::OnceCell;
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::config::db::StorageConfig;
use crate::errors::ConnectionError;
use crate::infra::db::connect_db;
use crate::infra::schema::ensure_schema;
use crate::repos::{ArticleRepository, UserRepository};

#[derive(Debug)]
pub struct Storage {
    conn: DatabaseConnection,
    articles: OnceCell<ArticleRepository>,
    users: OnceCell<UserRepository>,
}

impl Storage {
    /// Connect, ping and ensure the schema. No retry.
    pub async fn open(config: &StorageConfig) -> Result<Self, ConnectionError> {
        let conn = connect_db(config).await?;
        conn.ping().await.map_err(ConnectionError::Ping)?;
        ensure_schema(&conn).await.map_err(ConnectionError::Schema)?;

        info!(db.url = %config.redacted_url(), "Successfully connected to db");

        Ok(Self {
            conn,
            articles: OnceCell::new(),
            users: OnceCell::new(),
        })
    }

    /// Release the pool.
    pub async fn close(self) -> Result<(), ConnectionError> {
        self.conn.close().await.map_err(ConnectionError::Close)?;
        info!("database connection closed");
        Ok(())
    }

    /// Liveness check against the store.
    pub async fn ping(&self) -> Result<(), ConnectionError> {
        self.conn.ping().await.map_err(ConnectionError::Ping)
    }

    pub fn article(&self) -> &ArticleRepository {
        self.articles.get_or_init(|| {
            debug!("article repository initialised");
            ArticleRepository::new(self.conn.clone())
        })
    }

    pub fn user(&self) -> &UserRepository {
        self.users.get_or_init(|| {
            debug!("user repository initialised");
            UserRepository::new(self.conn.clone())
        })
    }

    /// Raw handle for ad-hoc statements (diagnostics, fault injection in tests).
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
