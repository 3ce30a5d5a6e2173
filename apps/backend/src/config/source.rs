use std::collections::HashMap;
use std::env;

use crate::error::AppError;

/// Where configuration values are read from.
pub trait ConfigSource {
    /// Returns the raw value for `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<String>;

    /// Get required variable or return error
    fn must_var(&self, name: &str) -> Result<String, AppError> {
        match self.var(name) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            Some(_) => Err(AppError::config(format!(
                "Required environment variable '{name}' is empty"
            ))),
            None => Err(AppError::config(format!(
                "Required environment variable '{name}' is not set"
            ))),
        }
    }

    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    }
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl EnvSource {
    /// Loads `.env` from the working directory (if any) into the process
    /// environment before reading. Already-set variables win.
    pub fn with_dotenv() -> Self {
        dotenvy::dotenv().ok();
        Self
    }
}

impl ConfigSource for EnvSource {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ConfigSource for HashMap<&str, &str> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).map(|v| v.to_string())
    }
}
