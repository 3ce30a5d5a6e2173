#![allow(dead_code)]

use std::collections::HashMap;

use todo_service::config::DatabaseConfig;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// The reference connection parameters used across scenarios.
pub fn scenario_vars() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("DB_HOST", "localhost"),
        ("DB_PORT", "5432"),
        ("DB_USER", "test"),
        ("DB_PASSWORD", "test"),
        ("DB_NAME", "todo"),
        ("DB_SSLMODE", "disable"),
    ])
}

pub fn scenario_config() -> DatabaseConfig {
    DatabaseConfig::from_source(&scenario_vars()).expect("scenario config is valid")
}
