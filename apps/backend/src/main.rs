use todo_service::infra::state::bootstrap_from_env;
use todo_service::telemetry;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    telemetry::init_tracing(telemetry::API_FILTER);

    // Environment variables come from the runtime environment or a local .env file
    info!("loading config");
    let state = match bootstrap_from_env().await {
        Ok(state) => state,
        Err(e) => {
            error!(code = e.code(), error = %e, "startup=failed");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    println!(
        "✅ Database connected: {:?} ({})",
        state.db,
        state.config.database.redacted_dsn()
    );
}
