//! Device permission matrix models.
//!
//! The catalog of purchasable devices is fixed; which roles may see each
//! catalog entry is configuration persisted in the database and editable
//! by administrators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::user::UserRole;

/// One entry of the fixed device catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogDevice {
    pub id: i64,
    pub name: &'static str,
    pub kind: &'static str,
}

/// The fixed three-device catalog offered to users.
pub const DEVICE_CATALOG: [CatalogDevice; 3] = [
    CatalogDevice {
        id: 1,
        name: "Phone SOS",
        kind: "Telefon",
    },
    CatalogDevice {
        id: 2,
        name: "GJD.13 Watch",
        kind: "Smartwatch",
    },
    CatalogDevice {
        id: 3,
        name: "BS.07 Band",
        kind: "Opaska",
    },
];

/// One cell of the persisted role visibility matrix.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicePermission {
    pub device_name: String,
    pub role: UserRole,
    pub allowed: bool,
    pub updated_at: DateTime<Utc>,
}

/// Catalog entry visible to the requesting role.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDeviceResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<CatalogDevice> for AvailableDeviceResponse {
    fn from(device: CatalogDevice) -> Self {
        Self {
            id: device.id,
            name: device.name.to_string(),
            kind: device.kind.to_string(),
        }
    }
}

/// Response for listing the devices a role may see.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableDevicesResponse {
    pub devices: Vec<AvailableDeviceResponse>,
    pub total: usize,
}

/// Full matrix as exposed to administrators.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionMatrixResponse {
    pub permissions: Vec<DevicePermission>,
}

/// Admin request to flip one (device, role) cell.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDevicePermissionRequest {
    #[validate(length(min = 1, max = 100, message = "Device name is required"))]
    pub device_name: String,
    pub role: UserRole,
    pub allowed: bool,
}

/// Whether `name` appears in the fixed catalog. Unknown devices are
/// denied by default; the caller decides whether to log or reject.
pub fn is_catalog_device(name: &str) -> bool {
    DEVICE_CATALOG.iter().any(|d| d.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_fixed() {
        assert_eq!(DEVICE_CATALOG.len(), 3);
        assert_eq!(DEVICE_CATALOG[0].name, "Phone SOS");
        assert_eq!(DEVICE_CATALOG[1].name, "GJD.13 Watch");
        assert_eq!(DEVICE_CATALOG[2].name, "BS.07 Band");
    }

    #[test]
    fn test_is_catalog_device() {
        assert!(is_catalog_device("Phone SOS"));
        assert!(is_catalog_device("BS.07 Band"));
        assert!(!is_catalog_device("Unknown Gadget"));
        assert!(!is_catalog_device("phone sos")); // names are case-sensitive
    }

    #[test]
    fn test_available_device_serializes_kind_as_type() {
        let response: AvailableDeviceResponse = DEVICE_CATALOG[2].into();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"type\":\"Opaska\""));
        assert!(json.contains("\"name\":\"BS.07 Band\""));
    }

    #[test]
    fn test_update_request_deserialization() {
        let json = r#"{"deviceName": "BS.07 Band", "role": "USER", "allowed": true}"#;
        let request: UpdateDevicePermissionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.device_name, "BS.07 Band");
        assert_eq!(request.role, UserRole::User);
        assert!(request.allowed);
        assert!(request.validate().is_ok());
    }
}
