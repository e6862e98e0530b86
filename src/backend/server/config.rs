/**
 * Server Configuration
 *
 * Turns an `AppConfig` into live services. Only the PostgreSQL pool is
 * optional: a missing URL or a failed connection is logged and the server
 * starts without a database.
 */

use sqlx::PgPool;

use crate::backend::db;
use crate::shared::AppConfig;

/// Database configuration result
pub type DatabaseConfig = Option<PgPool>;

/// Load and initialize database connection pool
///
/// - `None` if `database_url` is not set or connection fails
/// - Migrations run when `run_migrations` is set; a failure is logged and the
///   pool is still returned
pub async fn load_database(config: &AppConfig) -> DatabaseConfig {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
        return None;
    };

    tracing::info!("Connecting to database...");

    let pool = match db::connect(database_url, config.max_connections).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Database connection pool created successfully");

    if config.run_migrations {
        tracing::info!("Running database migrations...");
        match db::migrate(&pool).await {
            Ok(()) => tracing::info!("Database migrations completed successfully"),
            Err(e) => tracing::error!("Failed to run database migrations: {}", e),
        }
    }

    Some(pool)
}
