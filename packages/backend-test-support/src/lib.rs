//! Test helpers shared by the todo-service test binaries: logging setup,
//! scoped environment overrides, and live-database discovery.

pub mod env_guard;
pub mod live_db;
pub mod logging;

pub use env_guard::EnvGuard;
