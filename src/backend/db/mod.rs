//! Database Access
//!
//! A thin layer over the sqlx PostgreSQL pool. Each resource module
//! (`auth::users`, `locations::db`, `cameras::db`) writes its own SQL and
//! binds every user-supplied value as a `$n` parameter; nothing here builds
//! SQL from strings.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::backend::error::BackendError;

/// Open a connection pool
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}

/// Apply the embedded migrations in `migrations/`
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}

/// Round-trip a trivial query
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Borrow the pool, or fail with 503 when the server runs without a database
pub fn available(pool: &Option<PgPool>) -> Result<&PgPool, BackendError> {
    pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::DatabaseUnavailable
    })
}
