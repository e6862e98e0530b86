//! Location Types
//!
//! A location is a named site (house, shop, warehouse) owned by one user.
//! Cameras are always registered against a location.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::validation::{optional_length, require_length, Validate};

/// Body for creating a location or replacing one with PUT
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LocationRequest {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl Validate for LocationRequest {
    fn validate(&self) -> Result<(), SharedError> {
        require_length("name", &self.name, 1, 100)?;
        optional_length("address", self.address.as_deref(), 255)
    }
}

/// Location as stored and returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow))]
pub struct Location {
    pub id: Uuid,
    /// User who owns the location
    pub owner_id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
