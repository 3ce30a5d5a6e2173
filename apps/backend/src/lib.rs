#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod error;
pub mod infra;
pub mod state;
pub mod telemetry;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

// Re-exports for public API
pub use config::{load_config, Config, DatabaseConfig, SslMode};
pub use error::AppError;
pub use infra::db::{connect_db, open_db, DbOpener, SeaOrmOpener};
pub use infra::state::{bootstrap, bootstrap_from_env};
pub use state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
