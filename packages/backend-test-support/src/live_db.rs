//! Discovery of a real Postgres for tests that need one.
//!
//! Live tests read `TEST_DB_HOST`, `TEST_DB_PORT`, `TEST_DB_USER`,
//! `TEST_DB_PASSWORD`, `TEST_DB_NAME` and `TEST_DB_SSLMODE`. When
//! `TEST_DB_NAME` is unset they are skipped.

use std::collections::HashMap;
use std::env;

const MAPPING: [(&str, &str); 6] = [
    ("TEST_DB_HOST", "DB_HOST"),
    ("TEST_DB_PORT", "DB_PORT"),
    ("TEST_DB_USER", "DB_USER"),
    ("TEST_DB_PASSWORD", "DB_PASSWORD"),
    ("TEST_DB_NAME", "DB_NAME"),
    ("TEST_DB_SSLMODE", "DB_SSLMODE"),
];

/// `DB_*` variables for the live test database, or `None` to skip.
pub fn live_db_vars() -> Option<HashMap<String, String>> {
    env::var("TEST_DB_NAME").ok()?;

    let vars = MAPPING
        .iter()
        .filter_map(|(test_name, name)| {
            env::var(test_name)
                .ok()
                .map(|value| (name.to_string(), value))
        })
        .collect();
    Some(vars)
}
