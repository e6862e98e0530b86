//! Database operations for cameras
//!
//! No camera query trusts the caller: each one joins `locations` and filters
//! on `owner_id`, so a camera under someone else's location is never read or
//! written.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::Camera;

/// Insert a camera under an owned location.
///
/// The `INSERT ... SELECT` only produces a row when the location exists and
/// belongs to `owner_id`; otherwise the result is `None`.
pub async fn create_camera(
    pool: &PgPool,
    owner_id: Uuid,
    location_id: Uuid,
    name: &str,
    stream_url: &str,
    enabled: bool,
) -> Result<Option<Camera>, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Camera>(
        r#"
        INSERT INTO cameras (id, location_id, name, stream_url, enabled, created_at, updated_at)
        SELECT $1, l.id, $3, $4, $5, $6, $6
        FROM locations l
        WHERE l.id = $2 AND l.owner_id = $7
        RETURNING id, location_id, name, stream_url, enabled, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(location_id)
    .bind(name)
    .bind(stream_url)
    .bind(enabled)
    .bind(now)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Every camera across the owner's locations
pub async fn list_cameras(pool: &PgPool, owner_id: Uuid) -> Result<Vec<Camera>, sqlx::Error> {
    sqlx::query_as::<_, Camera>(
        r#"
        SELECT c.id, c.location_id, c.name, c.stream_url, c.enabled, c.created_at, c.updated_at
        FROM cameras c
        JOIN locations l ON l.id = c.location_id
        WHERE l.owner_id = $1
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Cameras of a single location; the caller checks the location is owned
pub async fn list_location_cameras(
    pool: &PgPool,
    location_id: Uuid,
    owner_id: Uuid,
) -> Result<Vec<Camera>, sqlx::Error> {
    sqlx::query_as::<_, Camera>(
        r#"
        SELECT c.id, c.location_id, c.name, c.stream_url, c.enabled, c.created_at, c.updated_at
        FROM cameras c
        JOIN locations l ON l.id = c.location_id
        WHERE c.location_id = $1 AND l.owner_id = $2
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(location_id)
    .bind(owner_id)
    .fetch_all(pool)
    .await
}

/// Get a camera by ID if its location belongs to the owner
pub async fn get_camera(pool: &PgPool, id: Uuid, owner_id: Uuid) -> Result<Option<Camera>, sqlx::Error> {
    sqlx::query_as::<_, Camera>(
        r#"
        SELECT c.id, c.location_id, c.name, c.stream_url, c.enabled, c.created_at, c.updated_at
        FROM cameras c
        JOIN locations l ON l.id = c.location_id
        WHERE c.id = $1 AND l.owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .fetch_optional(pool)
    .await
}

/// Replace a camera's settings; `None` when no owned row matched
pub async fn update_camera(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    name: &str,
    stream_url: &str,
    enabled: bool,
) -> Result<Option<Camera>, sqlx::Error> {
    sqlx::query_as::<_, Camera>(
        r#"
        UPDATE cameras c
        SET name = $3, stream_url = $4, enabled = $5, updated_at = $6
        FROM locations l
        WHERE c.id = $1 AND l.id = c.location_id AND l.owner_id = $2
        RETURNING c.id, c.location_id, c.name, c.stream_url, c.enabled, c.created_at, c.updated_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(name)
    .bind(stream_url)
    .bind(enabled)
    .bind(Utc::now())
    .fetch_optional(pool)
    .await
}

/// Delete a camera; returns whether a row was removed
pub async fn delete_camera(pool: &PgPool, id: Uuid, owner_id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM cameras c
        USING locations l
        WHERE c.id = $1 AND l.id = c.location_id AND l.owner_id = $2
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
