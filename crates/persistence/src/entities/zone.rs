//! Zone entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Zone;

/// Database row mapping for the zones table.
#[derive(Debug, Clone, FromRow)]
pub struct ZoneEntity {
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

impl From<ZoneEntity> for Zone {
    fn from(entity: ZoneEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            icon: entity.icon,
            address: entity.address,
            latitude: entity.latitude,
            longitude: entity.longitude,
            radius_meters: entity.radius_meters,
            notifications_enabled: entity.notifications_enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
