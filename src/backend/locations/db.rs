//! Database operations for locations
//!
//! Every statement filters on `owner_id`; callers pass the authenticated
//! user's id, never one taken from a request body.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::Location;

/// Create a new location
pub async fn create_location(
    pool: &PgPool,
    owner_id: Uuid,
    name: &str,
    address: Option<&str>,
) -> Result<Location, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Location>(
        r#"
        INSERT INTO locations (id, owner_id, name, address, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, owner_id, name, address, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(address)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// All locations of one owner, oldest first
pub async fn list_locations(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        SELECT id, owner_id, name, address, created_at, updated_at
        FROM locations
        WHERE owner_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Get a location by ID if the owner matches
pub async fn get_location(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        SELECT id, owner_id, name, address, created_at, updated_at
        FROM locations
        WHERE id = $1 AND owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Replace name and address; `None` when no owned row matched
pub async fn update_location(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    name: &str,
    address: Option<&str>,
) -> Result<Option<Location>, sqlx::Error> {
    sqlx::query_as::<_, Location>(
        r#"
        UPDATE locations
        SET name = $3, address = $4, updated_at = $5
        WHERE id = $1 AND owner_id = $2
        RETURNING id, owner_id, name, address, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(address)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Delete a location and, through the foreign key, its cameras.
///
/// Returns whether a row was removed.
pub async fn delete_location(pool: &PgPool, id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM locations WHERE id = $1 AND owner_id = $2")
        .bind(id)
        .bind(owner_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
