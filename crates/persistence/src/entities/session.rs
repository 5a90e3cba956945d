//! Session entity (database row mapping).
//!
//! Sessions store only the SHA-256 of the opaque bearer token; the raw
//! token never touches the database.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::user::UserRole;

/// Database row mapping for the sessions table.
#[derive(Debug, Clone, FromRow)]
pub struct SessionEntity {
    pub id: i64,
    pub user_id: i64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

/// Joined session + user row returned by the auth lookup.
#[derive(Debug, Clone, FromRow)]
pub struct SessionUserEntity {
    pub session_id: i64,
    pub user_id: i64,
    pub phone: String,
    pub role: String,
    pub expires_at: DateTime<Utc>,
}

impl SessionUserEntity {
    /// Parsed role of the session's user.
    pub fn user_role(&self) -> UserRole {
        self.role.parse().unwrap_or(UserRole::Viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_user_role_parsing() {
        let row = SessionUserEntity {
            session_id: 1,
            user_id: 2,
            phone: "+48123456789".to_string(),
            role: "ADMIN".to_string(),
            expires_at: Utc::now(),
        };
        assert_eq!(row.user_role(), UserRole::Admin);
    }

    #[test]
    fn test_session_user_unknown_role_falls_back_to_viewer() {
        let row = SessionUserEntity {
            session_id: 1,
            user_id: 2,
            phone: "+48123456789".to_string(),
            role: "ROOT".to_string(),
            expires_at: Utc::now(),
        };
        assert_eq!(row.user_role(), UserRole::Viewer);
    }
}
