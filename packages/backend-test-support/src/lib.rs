//! Backend test support utilities
//!
//! Envelope assertions, unique test data and unified logging initialization
//! for the article service's integration tests. Nothing here depends on
//! backend types.

pub mod envelope;
pub mod logging;
pub mod unique_helpers;
