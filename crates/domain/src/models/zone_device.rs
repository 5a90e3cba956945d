//! Zone/device association model.

use serde::Serialize;

/// Membership of a device in a zone. The `notifications_enabled` flag
/// overrides the zone-level setting for this one device.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDevice {
    pub id: i64,
    pub zone_id: i64,
    pub device_id: i64,
    pub notifications_enabled: bool,
}

impl ZoneDevice {
    /// Effective notification setting for this association given the
    /// zone-level flag. Notifications fire only when both are enabled.
    pub fn notifications_active(&self, zone_enabled: bool) -> bool {
        zone_enabled && self.notifications_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn association(enabled: bool) -> ZoneDevice {
        ZoneDevice {
            id: 1,
            zone_id: 10,
            device_id: 20,
            notifications_enabled: enabled,
        }
    }

    #[test]
    fn test_notifications_active_requires_both_flags() {
        assert!(association(true).notifications_active(true));
        assert!(!association(false).notifications_active(true));
        assert!(!association(true).notifications_active(false));
        assert!(!association(false).notifications_active(false));
    }
}
