//! User domain model and role logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role assigned to a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Admin,
    User,
    Viewer,
}

impl UserRole {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::User => "USER",
            UserRole::Viewer => "VIEWER",
        }
    }

    /// Whether this role may create, edit, or delete zones.
    pub fn can_manage_zones(&self) -> bool {
        !matches!(self, UserRole::Viewer)
    }

    /// Whether this role may administer the device permission matrix.
    pub fn can_manage_devices(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ADMIN" => Ok(UserRole::Admin),
            "USER" => Ok(UserRole::User),
            "VIEWER" => Ok(UserRole::Viewer),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a user account in the system.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub phone: String,
    pub role: UserRole,
    // OTP credentials are never serialized to API responses.
    #[serde(skip_serializing)]
    pub otp_code: Option<String>,
    #[serde(skip_serializing)]
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Decides whether a supplied OTP code matches the stored credential.
///
/// Succeeds only when a code is stored, the supplied code equals it
/// exactly, and the stored expiry is strictly after `now`. The caller
/// must clear the stored pair on success (single use).
pub fn otp_is_valid(
    stored_code: Option<&str>,
    stored_expiry: Option<DateTime<Utc>>,
    supplied: &str,
    now: DateTime<Utc>,
) -> bool {
    match (stored_code, stored_expiry) {
        (Some(code), Some(expiry)) => code == supplied && expiry > now,
        _ => false,
    }
}

/// Capability set for a role, as exposed to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsResponse {
    pub role: UserRole,
    pub phone: String,
    pub can_manage_zones: bool,
    pub can_manage_devices: bool,
}

impl PermissionsResponse {
    pub fn new(role: UserRole, phone: impl Into<String>) -> Self {
        Self {
            role,
            phone: phone.into(),
            can_manage_zones: role.can_manage_zones(),
            can_manage_devices: role.can_manage_devices(),
        }
    }

    /// Permission set returned when no session is present.
    pub fn anonymous() -> Self {
        Self::new(UserRole::Viewer, "anonymous")
    }
}
