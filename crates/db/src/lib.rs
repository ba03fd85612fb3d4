//! Data store adapter for the movie catalog.
//!
//! Owns pool construction and exposes the models and repositories used by
//! the HTTP layer. The pool is created once by the caller and passed by
//! reference into every repository method.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on open connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Connection pool parameters.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    /// How long a request may wait for a free connection.
    pub acquire_timeout: Duration,
    /// Server-side limit applied to every statement on every connection.
    pub statement_timeout: Duration,
}

impl PoolSettings {
    pub fn new(connect_options: PgConnectOptions) -> Self {
        Self {
            connect_options,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(5),
            statement_timeout: Duration::from_secs(10),
        }
    }
}

/// Create a bounded connection pool.
///
/// Statements exceeding `statement_timeout` are cancelled by PostgreSQL and
/// surface as an ordinary `sqlx::Error`.
pub async fn create_pool(settings: &PoolSettings) -> Result<DbPool, sqlx::Error> {
    let statement_timeout_ms = settings.statement_timeout.as_millis().to_string();
    let options = settings
        .connect_options
        .clone()
        .options([("statement_timeout", statement_timeout_ms)]);

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
