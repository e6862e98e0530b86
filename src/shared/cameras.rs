//! Camera Types
//!
//! A camera belongs to exactly one location and is reached through its
//! `stream_url`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{require_length, require_url, Validate};

/// URL schemes a camera stream may use
pub const STREAM_SCHEMES: &[&str] = &["rtsp", "rtsps", "http", "https"];

const MAX_STREAM_URL_LEN: usize = 2048;

fn default_enabled() -> bool {
    true
}

/// Body for registering a camera
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CreateCameraRequest {
    /// Location the camera is installed at; must belong to the caller
    pub location_id: Uuid,
    pub name: String,
    pub stream_url: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl Validate for CreateCameraRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_camera_fields(&self.name, &self.stream_url)
    }
}

/// Body for replacing a camera's settings with PUT
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateCameraRequest {
    pub name: String,
    pub stream_url: String,
    pub enabled: bool,
}

impl Validate for UpdateCameraRequest {
    fn validate(&self) -> Result<(), SharedError> {
        validate_camera_fields(&self.name, &self.stream_url)
    }
}

fn validate_camera_fields(name: &str, stream_url: &str) -> Result<(), SharedError> {
    require_length("name", name, 1, 100)?;
    require_length("stream_url", stream_url, 1, MAX_STREAM_URL_LEN)?;
    require_url("stream_url", stream_url, STREAM_SCHEMES)
}

/// Camera as stored and returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Camera {
    pub id: Uuid,
    pub location_id: Uuid,
    pub name: String,
    pub stream_url: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
