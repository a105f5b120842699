use crate::config::db::StorageConfig;
use crate::error::AppError;
use crate::infra::state::build_state;
use crate::state::{AppState, SecurityConfig};

/// Builder for creating test AppState instances
pub struct TestStateBuilder {
    security_config: SecurityConfig,
    storage_config: StorageConfig,
}

impl TestStateBuilder {
    /// In-memory storage and the default test secret
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            storage_config: StorageConfig::in_memory(),
        }
    }

    /// Override the storage configuration (e.g. a Postgres test database)
    pub fn with_storage(mut self, storage_config: StorageConfig) -> Self {
        self.storage_config = storage_config;
        self
    }

    /// Override the security configuration
    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        build_state()
            .with_storage(self.storage_config)
            .with_security(self.security_config)
            .build()
            .await
    }
}

impl Default for TestStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new test state builder
///
/// # Example
/// ```rust
/// use article_api::test_support::create_test_state;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let state = create_test_state().build().await?;
/// # Ok(())
/// # }
/// ```
pub fn create_test_state() -> TestStateBuilder {
    TestStateBuilder::new()
}
