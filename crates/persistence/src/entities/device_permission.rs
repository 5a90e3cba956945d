//! Device permission entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::permission::DevicePermission;
use domain::models::user::UserRole;

/// Database row mapping for the device_permissions table.
#[derive(Debug, Clone, FromRow)]
pub struct DevicePermissionEntity {
    pub id: i64,
    pub device_name: String,
    pub role: String,
    pub allowed: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<DevicePermissionEntity> for DevicePermission {
    fn from(entity: DevicePermissionEntity) -> Self {
        Self {
            device_name: entity.device_name,
            role: entity.role.parse().unwrap_or(UserRole::Viewer),
            allowed: entity.allowed,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_permission_entity_to_domain() {
        let entity = DevicePermissionEntity {
            id: 1,
            device_name: "BS.07 Band".to_string(),
            role: "USER".to_string(),
            allowed: false,
            updated_at: Utc::now(),
        };
        let permission: DevicePermission = entity.clone().into();

        assert_eq!(permission.device_name, entity.device_name);
        assert_eq!(permission.role, UserRole::User);
        assert!(!permission.allowed);
    }
}
