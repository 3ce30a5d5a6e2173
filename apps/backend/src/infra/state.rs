use tracing::info;

use crate::config::{Config, ConfigSource, EnvSource};
use crate::error::AppError;
use crate::infra::db::{open_db, DbOpener, SeaOrmOpener};
use crate::state::app_state::AppState;

/// Loads configuration from `source`, then opens the database with `opener`.
///
/// A configuration error returns before `opener` is touched. Nothing here
/// exits the process; the binary maps errors to exit codes.
pub async fn bootstrap(
    source: &impl ConfigSource,
    opener: &dyn DbOpener,
) -> Result<AppState, AppError> {
    info!("bootstrap=start");

    let config = Config::from_source(source)?;
    let db = open_db(&config.database, opener).await?;

    info!("bootstrap=ready");
    Ok(AppState::new(config, db))
}

/// Production wiring: `.env` + process environment, sea-orm opener.
pub async fn bootstrap_from_env() -> Result<AppState, AppError> {
    bootstrap(&EnvSource::with_dotenv(), &SeaOrmOpener).await
}
