//! Test utilities for bunsen-tree
//!
//! Shared helpers for unit and integration tests: one-time logging setup and
//! view fixtures that can be parsed in memory or written to a temporary
//! directory for the CLI.
//!
//! # Example
//!
//! ```rust,no_run
//! use bunsen_tree::test_utils::{ViewFixture, init_test_logging};
//!
//! init_test_logging(None);
//! let view = ViewFixture::addresses().cell().unwrap();
//! assert!(view.count() > 1);
//! ```

pub mod fixtures;

pub use fixtures::ViewFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG` if it is set; with neither,
/// no subscriber is installed. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=bunsen_tree=trace cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
