//! Logging for integration test binaries.
//!
//! Same level precedence as the backend's unit-test bootstrap
//! (`TEST_LOG`, then `RUST_LOG`, then `"warn"`). Setting
//! `TEST_LOG_FORMAT=json` switches to the JSON layout the server emits.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the test subscriber once per process.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let json = std::env::var("TEST_LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let builder = fmt().with_env_filter(filter).with_test_writer();
        if json {
            builder.json().try_init().ok();
        } else {
            builder.without_time().try_init().ok();
        }
    });
}
