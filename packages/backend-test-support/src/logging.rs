//! Unified test logging initialization
//!
//! Every todo-service test binary installs this once, either through a
//! `ctor` hook or by calling [`init`] at the top of a test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Quiet by default; sqlx statement logs stay off unless asked for.
pub const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error";

/// Initialize structured logging for tests.
///
/// This function is idempotent and race-safe. The logging level is
/// controlled in this order of precedence:
///
/// 1. `TEST_LOG` environment variable (preferred)
/// 2. `RUST_LOG` environment variable (fallback)
/// 3. [`DEFAULT_TEST_FILTER`]
///
/// Output goes through `with_test_writer()` so cargo captures it per test,
/// and timestamps are dropped to keep failures diffable.
///
/// ```bash
/// TEST_LOG=info cargo test -p todo-service
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}

fn test_filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER))
}
