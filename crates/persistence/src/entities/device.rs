//! Device entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Device;

/// Database row mapping for the devices table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceEntity {
    pub id: i64,
    pub user_id: i64,
    pub kind: String,
    pub model: String,
    pub owner_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<DeviceEntity> for Device {
    fn from(entity: DeviceEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            model: entity.model,
            owner_name: entity.owner_name,
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_entity_to_domain() {
        let entity = DeviceEntity {
            id: 4,
            user_id: 2,
            kind: "Senior Band".to_string(),
            model: "HealthTracker 3000".to_string(),
            owner_name: "John (Senior)".to_string(),
            created_at: Utc::now(),
        };
        let device: Device = entity.clone().into();

        assert_eq!(device.id, entity.id);
        assert_eq!(device.kind, entity.kind);
        assert_eq!(device.model, entity.model);
        assert_eq!(device.owner_name, entity.owner_name);
    }
}
