//! Zone domain model and request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a named circular geographic area owned by a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub icon: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: i32,
    pub notifications_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_notifications_enabled() -> bool {
    true
}

/// Request payload for creating a zone.
///
/// Coordinates are optional; when omitted the configured default center
/// is applied.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 16, message = "Icon must be 1-16 characters"))]
    pub icon: String,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius_meters: i32,

    #[serde(default)]
    pub device_ids: Vec<i64>,

    #[serde(default = "default_notifications_enabled")]
    pub notifications_enabled: bool,
}

/// Request payload for updating a zone. All textual fields overwrite in
/// place; omitted coordinates preserve the stored values.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateZoneRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 16, message = "Icon must be 1-16 characters"))]
    pub icon: String,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius_meters: i32,

    #[serde(default)]
    pub device_ids: Vec<i64>,
}

/// Response payload for zone operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneResponse {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: i32,
    pub notifications_enabled: bool,
    pub device_ids: Vec<i64>,
    pub device_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ZoneResponse {
    /// Assembles a response from a zone and its device associations.
    pub fn from_parts(zone: Zone, device_ids: Vec<i64>) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
            icon: zone.icon,
            address: zone.address,
            latitude: zone.latitude,
            longitude: zone.longitude,
            radius_meters: zone.radius_meters,
            notifications_enabled: zone.notifications_enabled,
            device_count: device_ids.len(),
            device_ids,
            created_at: zone.created_at,
            updated_at: zone.updated_at,
        }
    }
}

/// Response for listing a user's zones.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListZonesResponse {
    pub zones: Vec<ZoneResponse>,
    pub total: usize,
}

/// Aggregate counters for a user's zones.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatsResponse {
    pub zone_count: i64,
    pub device_count: i64,
}
