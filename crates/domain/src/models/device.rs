//! Device domain model.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A tracked device belonging to a user. Devices are seeded or created
/// by administrators and are read-only through the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: i64,
    pub user_id: i64,
    /// Device category, e.g. "Phone", "Child Watch", "Senior Band".
    pub kind: String,
    pub model: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl Device {
    /// Display name used when attributing geofence events to a device.
    pub fn display_name(&self) -> &str {
        &self.model
    }
}

/// Response payload for device endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub model: String,
    pub owner_name: String,
    pub user_id: i64,
}

impl From<Device> for DeviceResponse {
    fn from(device: Device) -> Self {
        Self {
            id: device.id,
            kind: device.kind,
            model: device.model,
            owner_name: device.owner_name,
            user_id: device.user_id,
        }
    }
}

/// Response for listing a user's devices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDevicesResponse {
    pub devices: Vec<DeviceResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_device() -> Device {
        Device {
            id: 3,
            user_id: 2,
            kind: "Child Watch".to_string(),
            model: "KidsGuard Pro".to_string(),
            owner_name: "Emma (Child)".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_is_model() {
        assert_eq!(sample_device().display_name(), "KidsGuard Pro");
    }

    #[test]
    fn test_device_response_serializes_kind_as_type() {
        let response: DeviceResponse = sample_device().into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"type\":\"Child Watch\""));
        assert!(json.contains("\"ownerName\":\"Emma (Child)\""));
        assert!(!json.contains("\"kind\""));
    }
}
