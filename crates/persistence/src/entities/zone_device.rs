//! Zone/device association entity (database row mapping).

use sqlx::FromRow;

use domain::models::ZoneDevice;

/// Database row mapping for the zone_devices join table.
#[derive(Debug, Clone, FromRow)]
pub struct ZoneDeviceEntity {
    pub id: i64,
    pub zone_id: i64,
    pub device_id: i64,
    pub notifications_enabled: bool,
}

impl From<ZoneDeviceEntity> for ZoneDevice {
    fn from(entity: ZoneDeviceEntity) -> Self {
        Self {
            id: entity.id,
            zone_id: entity.zone_id,
            device_id: entity.device_id,
            notifications_enabled: entity.notifications_enabled,
        }
    }
}
