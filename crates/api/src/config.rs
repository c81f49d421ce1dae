use chrono::Duration;
use gymchain_core::manager::DEFAULT_PASSWORD_MIN_LENGTH;
use gymchain_core::tokens::{
    DEFAULT_EMAIL_VERIFICATION_TTL_HOURS, DEFAULT_PASSWORD_RESET_TTL_MINUTES,
};

/// Error raised when an environment variable holds an unparseable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be a valid {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Token and password policy for manager accounts.
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// Lifetime of an email-verification token.
    pub email_verification_ttl: Duration,
    /// Lifetime of a password-reset token.
    pub password_reset_ttl: Duration,
    /// Minimum accepted password length.
    pub password_min_length: usize,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            email_verification_ttl: Duration::hours(DEFAULT_EMAIL_VERIFICATION_TTL_HOURS),
            password_reset_ttl: Duration::minutes(DEFAULT_PASSWORD_RESET_TTL_MINUTES),
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Seconds to wait for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub account: AccountConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `HOST`                          | `0.0.0.0`               |
    /// | `PORT`                          | `3000`                  |
    /// | `CORS_ORIGINS`                  | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`         | `30`                    |
    /// | `EMAIL_VERIFICATION_TTL_HOURS`  | `24`                    |
    /// | `PASSWORD_RESET_TTL_MINUTES`    | `60`                    |
    /// | `PASSWORD_MIN_LENGTH`           | `8`                     |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_env("PORT", 3000_u16, "u16")?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30_u64, "u64")?;
        let shutdown_timeout_secs = parse_env("SHUTDOWN_TIMEOUT_SECS", 30_u64, "u64")?;

        let account = AccountConfig {
            email_verification_ttl: Duration::hours(parse_env(
                "EMAIL_VERIFICATION_TTL_HOURS",
                DEFAULT_EMAIL_VERIFICATION_TTL_HOURS,
                "i64",
            )?),
            password_reset_ttl: Duration::minutes(parse_env(
                "PASSWORD_RESET_TTL_MINUTES",
                DEFAULT_PASSWORD_RESET_TTL_MINUTES,
                "i64",
            )?),
            password_min_length: parse_env(
                "PASSWORD_MIN_LENGTH",
                DEFAULT_PASSWORD_MIN_LENGTH,
                "usize",
            )?,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            account,
        })
    }
}

/// Read `var` and parse it, falling back to `default` when unset.
fn parse_env<T: std::str::FromStr>(
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError {
            var,
            expected,
            value,
        }),
        Err(_) => Ok(default),
    }
}
