//! Mock geofence event endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use persistence::repositories::{DeviceRepository, ZoneDeviceRepository, ZoneRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_events_generated;
use crate::middleware::CurrentUser;
use domain::models::geofence_event::ListGeofenceEventsResponse;
use domain::services::geofence_sim::{self, EventDevice, ZoneSnapshot};

fn default_count() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Generate mock ENTER/EXIT events for a zone.
///
/// GET /api/v1/zones/:id/events?count=N
///
/// Events are synthesized on every call and never persisted; repeated
/// calls with identical parameters yield different output.
pub async fn generate_events(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(zone_id): Path<i64>,
    Query(query): Query<EventsQuery>,
) -> Result<Json<ListGeofenceEventsResponse>, ApiError> {
    let zone_repo = ZoneRepository::new(state.pool.clone());
    let entity = zone_repo
        .find_by_id_and_user(zone_id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Zone not found".to_string()))?;

    let zone = ZoneSnapshot {
        id: entity.id,
        name: entity.name,
        latitude: entity.latitude,
        longitude: entity.longitude,
        radius_meters: entity.radius_meters,
    };

    let association_repo = ZoneDeviceRepository::new(state.pool.clone());
    let device_ids = association_repo.find_device_ids_by_zone(zone.id).await?;

    let device_repo = DeviceRepository::new(state.pool.clone());
    let known = device_repo.find_by_ids(&device_ids).await?;

    // Resolve display names from the devices table; ids with no row
    // keep the generic fallback name.
    let devices: Vec<EventDevice> = device_ids
        .iter()
        .map(|id| EventDevice {
            id: id.to_string(),
            name: known
                .iter()
                .find(|d| d.id == *id)
                .map(|d| d.model.clone())
                .unwrap_or_else(|| format!("Device {}", id)),
        })
        .collect();

    let events = geofence_sim::generate_events(
        &zone,
        &devices,
        query.count,
        Utc::now(),
        &mut rand::thread_rng(),
    );
    record_events_generated(events.len());

    info!(
        zone_id = zone.id,
        count = events.len(),
        "Generated mock geofence events"
    );

    let total = events.len();
    Ok(Json(ListGeofenceEventsResponse { events, total }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_query_default_count() {
        let query: EventsQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.count, 10);
    }

    #[test]
    fn test_events_query_explicit_count() {
        let query: EventsQuery = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        assert_eq!(query.count, 5);
    }
}
