use std::str::FromStr;
use std::time::Duration;

use marquee_db::{PoolSettings, DEFAULT_MAX_CONNECTIONS};
use sqlx::postgres::PgConnectOptions;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("DATABASE_URL is not a valid PostgreSQL URL: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub database: DatabaseConfig,
}

/// Database connection and pool configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. Takes precedence over the discrete fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub statement_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// | Env Var                     | Default     |
    /// |-----------------------------|-------------|
    /// | `HOST`                      | `0.0.0.0`   |
    /// | `PORT`                      | `3000`      |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`        |
    /// | `DATABASE_URL`              | unset       |
    /// | `DB_HOST`                   | `localhost` |
    /// | `DB_PORT`                   | `5432`      |
    /// | `DB_USER`                   | `postgres`  |
    /// | `DB_PASSWORD`               | unset       |
    /// | `DB_NAME`                   | `movies`    |
    /// | `DB_MAX_CONNECTIONS`        | `10`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`   | `5`         |
    /// | `DB_STATEMENT_TIMEOUT_SECS` | `10`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            host: text("DB_HOST", "localhost"),
            port: parse_var(&lookup, "DB_PORT", 5432, "a valid u16")?,
            user: text("DB_USER", "postgres"),
            password: lookup("DB_PASSWORD").filter(|v| !v.is_empty()),
            name: text("DB_NAME", "movies"),
            max_connections: parse_var(
                &lookup,
                "DB_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
                "a valid u32",
            )?,
            acquire_timeout_secs: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5, "a valid u64")?,
            statement_timeout_secs: parse_var(
                &lookup,
                "DB_STATEMENT_TIMEOUT_SECS",
                10,
                "a valid u64",
            )?,
        };

        Ok(Self {
            host: text("HOST", "0.0.0.0"),
            port: parse_var(&lookup, "PORT", 3000, "a valid u16")?,
            request_timeout_secs: parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30, "a valid u64")?,
            database,
        })
    }
}

impl DatabaseConfig {
    /// Build pool settings, preferring `url` when present.
    pub fn pool_settings(&self) -> Result<PoolSettings, ConfigError> {
        let connect_options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl)?,
            None => {
                let options = PgConnectOptions::new()
                    .host(&self.host)
                    .port(self.port)
                    .username(&self.user)
                    .database(&self.name);
                match &self.password {
                    Some(password) => options.password(password),
                    None => options,
                }
            }
        };

        let mut settings = PoolSettings::new(connect_options);
        settings.max_connections = self.max_connections;
        settings.acquire_timeout = Duration::from_secs(self.acquire_timeout_secs);
        settings.statement_timeout = Duration::from_secs(self.statement_timeout_secs);
        Ok(settings)
    }
}

fn parse_var<F, T>(
    lookup: &F,
    var: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map_err(|_| ConfigError::Invalid {
                var,
                value,
                expected,
            })
        }
        _ => Ok(default),
    }
}
