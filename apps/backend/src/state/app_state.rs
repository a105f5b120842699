use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::db::Storage;

/// Application state shared by every worker
#[derive(Debug, Clone)]
pub struct AppState {
    /// Connection manager; one per process
    pub storage: Arc<Storage>,
    /// Token signing configuration
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(storage: Storage, security: SecurityConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            security,
        }
    }

    /// Take the storage back for shutdown once every other handle is gone.
    pub fn into_storage(self) -> Option<Storage> {
        Arc::into_inner(self.storage)
    }
}
