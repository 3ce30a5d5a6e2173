use todo_service::config::load_config;
use todo_service::telemetry;
use tracing::{error, info};

/// Loads and validates configuration without touching the database.
fn main() {
    telemetry::init_tracing(telemetry::CONFIG_CHECK_FILTER);

    info!("loading config");
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(code = e.code(), error = %e, "config=invalid");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Config OK: {}", config.database.redacted_dsn());
}
