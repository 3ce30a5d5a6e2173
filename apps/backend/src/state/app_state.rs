use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Everything startup produces: the loaded configuration and the open handle.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Shared handle; sea-orm's mock backend makes the bare connection non-`Clone`
    pub db: Arc<DatabaseConnection>,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        Self {
            config,
            db: Arc::new(db),
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
