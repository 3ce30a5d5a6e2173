use sea_orm::DbErr;
use thiserror::Error;

/// Startup errors. Both kinds are fatal at the process level; callers decide
/// how to exit.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    /// The driver error is part of the message and is not exposed as `source()`.
    #[error("failed to connect to database: {driver}")]
    DbConnect { driver: DbErr },
}

impl AppError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::DbConnect { .. } => "DB_CONNECT_FAILED",
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_connect(driver: DbErr) -> Self {
        Self::DbConnect { driver }
    }

    /// Underlying driver error for connection failures
    pub fn driver_error(&self) -> Option<&DbErr> {
        match self {
            AppError::DbConnect { driver } => Some(driver),
            AppError::Config { .. } => None,
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config { .. })
    }
}
