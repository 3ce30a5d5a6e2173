use std::sync::Mutex;

use async_trait::async_trait;
use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, RuntimeErr};

use crate::infra::db::DbOpener;

fn mock_pg_connection() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

/// Always succeeds with an empty Postgres mock connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockOpener;

#[async_trait]
impl DbOpener for MockOpener {
    async fn open(&self, _dsn: &str) -> Result<DatabaseConnection, DbErr> {
        Ok(mock_pg_connection())
    }
}

/// Always fails with a connection error carrying `message`.
#[derive(Debug, Clone)]
pub struct FailingOpener {
    message: String,
}

impl FailingOpener {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DbOpener for FailingOpener {
    async fn open(&self, _dsn: &str) -> Result<DatabaseConnection, DbErr> {
        Err(DbErr::Conn(RuntimeErr::Internal(self.message.clone())))
    }
}

/// Records every DSN it is asked to open, then succeeds like [`MockOpener`].
#[derive(Debug, Default)]
pub struct RecordingOpener {
    dsns: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn dsns(&self) -> Vec<String> {
        self.dsns.lock().expect("recording opener poisoned").clone()
    }

    pub fn calls(&self) -> usize {
        self.dsns.lock().expect("recording opener poisoned").len()
    }
}

#[async_trait]
impl DbOpener for RecordingOpener {
    async fn open(&self, dsn: &str) -> Result<DatabaseConnection, DbErr> {
        self.dsns
            .lock()
            .expect("recording opener poisoned")
            .push(dsn.to_string());
        Ok(mock_pg_connection())
    }
}
