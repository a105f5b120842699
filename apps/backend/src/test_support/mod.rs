//! Helpers for building an application against in-memory storage.
//!
//! Each call opens a fresh SQLite database, so tests never share rows.

pub mod app_builder;
pub mod state_builder;

pub use app_builder::{create_test_app_builder, TestAppBuilder};
pub use state_builder::{create_test_state, TestStateBuilder};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// State backed by a fresh in-memory database and the default test secret.
pub async fn test_state() -> Result<AppState, AppError> {
    create_test_state().build().await
}
