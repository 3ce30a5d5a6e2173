use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::source::ConfigSource;
use crate::error::AppError;

/// Characters left as-is in the userinfo part of the URL (RFC 3986 unreserved).
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";

/// libpq `sslmode` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SslMode {
    #[default]
    Disable,
    Allow,
    Prefer,
    Require,
    VerifyCa,
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Allow => "allow",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl fmt::Display for SslMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SslMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "allow" => Ok(SslMode::Allow),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(AppError::config(format!(
                "Unsupported sslmode '{other}' (expected one of disable, allow, prefer, require, verify-ca, verify-full)"
            ))),
        }
    }
}

/// Postgres connection parameters
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: SslMode,
}

impl DatabaseConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME` and
    /// `DB_SSLMODE`. Host, port and sslmode have defaults.
    pub fn from_source(source: &impl ConfigSource) -> Result<Self, AppError> {
        let host = parse_host(&source.var_or("DB_HOST", DEFAULT_HOST))?;
        let port = parse_port(&source.var_or("DB_PORT", DEFAULT_PORT))?;
        let user = source.must_var("DB_USER")?;
        let password = source.must_var("DB_PASSWORD")?;
        let name = source.must_var("DB_NAME")?;
        let sslmode = match source.var("DB_SSLMODE") {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SslMode::default(),
        };

        Ok(Self {
            host,
            port,
            user,
            password,
            name,
            sslmode,
        })
    }

    /// Connection string in URL form, which is what sea-orm dispatches on.
    pub fn dsn(&self) -> String {
        self.render(&utf8_percent_encode(&self.password, USERINFO).to_string())
    }

    /// Same as [`dsn`](Self::dsn) with the password masked. Safe to log.
    pub fn redacted_dsn(&self) -> String {
        self.render("***")
    }

    fn render(&self, password: &str) -> String {
        let user = utf8_percent_encode(&self.user, USERINFO);
        let name = utf8_percent_encode(&self.name, USERINFO);
        format!(
            "postgres://{user}:{password}@{host}:{port}/{name}?sslmode={sslmode}",
            host = url_host(&self.host),
            port = self.port,
            sslmode = self.sslmode,
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

fn parse_port(raw: &str) -> Result<u16, AppError> {
    match raw.trim().parse::<u16>() {
        Ok(0) | Err(_) => Err(AppError::config(format!(
            "DB_PORT must be a valid port number, got: '{raw}'"
        ))),
        Ok(port) => Ok(port),
    }
}

/// Trimmed TCP host name or IP literal. Unix socket directories are not
/// expressible in the URL authority, so they are rejected here rather than at
/// connect time.
fn parse_host(raw: &str) -> Result<String, AppError> {
    let host = raw.trim();
    if host.starts_with('/') {
        return Err(AppError::config(format!(
            "DB_HOST must be a TCP host name or IP address, got socket path: '{host}'"
        )));
    }
    if host
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '@' | '/' | '?' | '#'))
    {
        return Err(AppError::config(format!(
            "DB_HOST contains characters not allowed in a host name: '{host}'"
        )));
    }
    Ok(host.to_string())
}

// IPv6 literals need brackets inside a URL authority
fn url_host(host: &str) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    }
}
