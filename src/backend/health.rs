//! GET /api/health
//!
//! Liveness plus a database probe. Always 200; the `database` field says
//! whether the pool answered.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::backend::db;

/// Result of the database probe
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Up,
    Down,
    /// Server started without a database
    Disabled,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub database: DatabaseStatus,
}

pub async fn health(State(pool): State<Option<PgPool>>) -> Json<HealthResponse> {
    let database = match &pool {
        None => DatabaseStatus::Disabled,
        Some(pool) => match db::ping(pool).await {
            Ok(()) => DatabaseStatus::Up,
            Err(e) => {
                tracing::error!("Health check database ping failed: {}", e);
                DatabaseStatus::Down
            }
        },
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database,
    })
}
