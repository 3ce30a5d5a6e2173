use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::{error, info};

use crate::config::db::DatabaseConfig;
use crate::error::AppError;

/// Capability to open a database handle from a connection string.
#[async_trait]
pub trait DbOpener: Send + Sync {
    async fn open(&self, dsn: &str) -> Result<DatabaseConnection, DbErr>;
}

/// Opens a real connection through sea-orm with default options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeaOrmOpener;

#[async_trait]
impl DbOpener for SeaOrmOpener {
    async fn open(&self, dsn: &str) -> Result<DatabaseConnection, DbErr> {
        Database::connect(ConnectOptions::new(dsn)).await
    }
}

/// Builds the DSN from `cfg` and opens it with `opener`.
/// No retry: the first failure is returned as [`AppError::DbConnect`].
pub async fn open_db(
    cfg: &DatabaseConfig,
    opener: &dyn DbOpener,
) -> Result<DatabaseConnection, AppError> {
    info!("db=connecting dsn={}", cfg.redacted_dsn());

    match opener.open(&cfg.dsn()).await {
        Ok(conn) => {
            info!("db=connected backend={:?}", conn.get_database_backend());
            Ok(conn)
        }
        Err(e) => {
            error!(error = %e, "db=connect_failed dsn={}", cfg.redacted_dsn());
            Err(AppError::db_connect(e))
        }
    }
}

/// Opens `cfg` with [`SeaOrmOpener`].
pub async fn connect_db(cfg: &DatabaseConfig) -> Result<DatabaseConnection, AppError> {
    open_db(cfg, &SeaOrmOpener).await
}
