//! # nt DB
//!
//! Postgres pool setup and helpers for classifying storage errors.
//!
//! # Example
//!
//! ```ignore
//! use nt_config::DatabaseConfig;
//! use nt_db::init_db_pool;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! ```

use nt_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing::info;

pub use sqlx::PgPool;

/// Unique constraint on `_user.email`, declared in the initial migration.
pub const USER_EMAIL_UNIQUE: &str = "_user_email_key";

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Opens a connection pool using `DATABASE_URL` and `DATABASE_MAX_CONNECTIONS`.
///
/// Should be called once at startup; the returned pool is cheap to clone.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, PoolError> {
    let url = config.url.as_deref().ok_or(PoolError::MissingUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await
        .map_err(PoolError::Connect)?;

    info!(
        max_connections = config.max_connections,
        "Database pool initialized"
    );

    Ok(pool)
}

/// True when `err` is a Postgres unique-constraint violation (SQLSTATE 23505).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

/// Name of the violated constraint when `err` is a unique violation.
pub fn unique_violation_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => db_err.constraint(),
        _ => None,
    }
}
