//! Startup configuration, read once at process entry and passed down explicitly.

pub mod db;
pub mod source;

use tracing::info;

pub use db::{DatabaseConfig, SslMode};
pub use source::{ConfigSource, EnvSource};

use crate::error::AppError;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database: DatabaseConfig,
}

impl Config {
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, AppError> {
        let database = DatabaseConfig::from_source(source)?;

        info!(
            "config=loaded host={} port={} db={} sslmode={}",
            database.host, database.port, database.name, database.sslmode
        );

        Ok(Self { database })
    }
}

/// Loads `.env` (if present) and reads configuration from the process environment.
pub fn load_config() -> Result<Config, AppError> {
    Config::from_source(&EnvSource::with_dotenv())
}
