//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::user::{User, UserRole};

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub phone: String,
    pub role: String,
    pub otp_code: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            phone: entity.phone,
            // Unknown role strings degrade to the least-privileged role.
            role: entity.role.parse().unwrap_or(UserRole::Viewer),
            otp_code: entity.otp_code,
            otp_expires_at: entity.otp_expires_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
