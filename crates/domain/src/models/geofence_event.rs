//! Mock geofence event models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Boundary transition type carried by a geofence event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GeofenceEventType {
    Enter,
    Exit,
}

impl GeofenceEventType {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enter => "ENTER",
            Self::Exit => "EXIT",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "ENTER" => Some(Self::Enter),
            "EXIT" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl std::fmt::Display for GeofenceEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A synthesized geofence event. Events are generated on demand and
/// never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceEvent {
    pub zone_id: i64,
    pub zone_name: String,
    pub device_id: String,
    pub device_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: i32,
    pub event_type: GeofenceEventType,
    pub occurred_at: DateTime<Utc>,
}

/// Response for the event generation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListGeofenceEventsResponse {
    pub events: Vec<GeofenceEvent>,
    pub total: usize,
}
