use crate::config::db::StorageConfig;
use crate::db::Storage;
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    storage_config: Option<StorageConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            storage_config: None,
        }
    }
    pub fn with_storage(mut self, config: StorageConfig) -> Self {
        self.storage_config = Some(config);
        self
    }
    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let config = self
            .storage_config
            .ok_or_else(|| AppError::config("storage configuration is required"))?;
        let storage = Storage::open(&config).await?;
        Ok(AppState::new(storage, self.security_config))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
