//! Process-wide tracing setup for the binaries.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter for the `api` binary: startup markers at info, driver chatter at warn.
pub const API_FILTER: &str = "info,sqlx=warn,sea_orm=warn";

/// Filter for `config-check`, which never loads the driver.
pub const CONFIG_CHECK_FILTER: &str = "info";

/// Install a JSON subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Call once, before anything logs.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(resolve_filter(default_filter))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .json(),
        )
        .init();
}

fn resolve_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

#[cfg(test)]
mod tests {
    use backend_test_support::EnvGuard;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn default_filter_applies_without_rust_log() {
        let _env = EnvGuard::new().unset("RUST_LOG");
        assert_eq!(
            resolve_filter(API_FILTER).to_string(),
            EnvFilter::new(API_FILTER).to_string()
        );
    }

    #[test]
    #[serial]
    fn rust_log_overrides_default() {
        let _env = EnvGuard::new().set("RUST_LOG", "debug");
        assert_eq!(resolve_filter(CONFIG_CHECK_FILTER).to_string(), "debug");
    }
}
