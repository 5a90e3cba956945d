//! Mock geofence event synthesis.
//!
//! There is no real geofencing engine behind this service: events are
//! random, generated on demand, and never stored. Each event picks a
//! random device attached to the zone, flips a coin for ENTER vs EXIT,
//! and places the crossing at a jittered coordinate near the zone
//! center with a timestamp backdated by up to an hour.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::geofence_event::{GeofenceEvent, GeofenceEventType};

/// Upper bound on events synthesized per request.
pub const MAX_EVENTS_PER_REQUEST: usize = 100;

/// Largest coordinate offset applied when jittering, in meters.
const MAX_JITTER_METERS: f64 = 50.0;

/// Meters per degree of latitude.
const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// Meters per degree of longitude at the equator.
const METERS_PER_DEGREE_LNG: f64 = 111_320.0;

/// Snapshot of the zone the events are generated for.
#[derive(Debug, Clone)]
pub struct ZoneSnapshot {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: i32,
}

/// A device eligible to appear in generated events.
#[derive(Debug, Clone)]
pub struct EventDevice {
    pub id: String,
    pub name: String,
}

impl EventDevice {
    /// The synthetic device substituted when a zone has no devices.
    pub fn virtual_fallback() -> Self {
        Self {
            id: "virtual-1".to_string(),
            name: "Device virtual-1".to_string(),
        }
    }
}

/// Synthesizes `count` mock ENTER/EXIT events for a zone.
///
/// Always yields at least one event; `count` is capped at
/// [`MAX_EVENTS_PER_REQUEST`]. When `devices` is empty a single virtual
/// device stands in. Timestamps are backdated by a uniform 0-3600 s
/// offset from `now`, so the output reads as recent history.
pub fn generate_events<R: Rng>(
    zone: &ZoneSnapshot,
    devices: &[EventDevice],
    count: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<GeofenceEvent> {
    let fallback = [EventDevice::virtual_fallback()];
    let pool: &[EventDevice] = if devices.is_empty() {
        &fallback
    } else {
        devices
    };

    let count = count.clamp(1, MAX_EVENTS_PER_REQUEST);
    let mut events = Vec::with_capacity(count);

    for _ in 0..count {
        let device = &pool[rng.gen_range(0..pool.len())];
        let event_type = if rng.gen_bool(0.5) {
            GeofenceEventType::Enter
        } else {
            GeofenceEventType::Exit
        };
        let (latitude, longitude) =
            jitter_coordinates(zone.latitude, zone.longitude, zone.radius_meters, rng);

        events.push(GeofenceEvent {
            zone_id: zone.id,
            zone_name: zone.name.clone(),
            device_id: device.id.clone(),
            device_name: device.name.clone(),
            latitude,
            longitude,
            radius_meters: zone.radius_meters,
            event_type,
            occurred_at: now - Duration::seconds(rng.gen_range(0..3600)),
        });
    }

    events
}

/// Applies a small random offset to a coordinate pair.
///
/// The offset is bounded by min(50 m, radius/5) in each axis, converted
/// to degrees with the usual per-degree meter counts (longitude scaled
/// by the cosine of the latitude).
fn jitter_coordinates<R: Rng>(
    latitude: f64,
    longitude: f64,
    radius_meters: i32,
    rng: &mut R,
) -> (f64, f64) {
    let max_offset_meters = MAX_JITTER_METERS.min(radius_meters as f64 / 5.0);
    let d_lat = (rng.gen::<f64>() - 0.5) * 2.0 * (max_offset_meters / METERS_PER_DEGREE_LAT);
    let d_lng = (rng.gen::<f64>() - 0.5)
        * 2.0
        * (max_offset_meters / (METERS_PER_DEGREE_LNG * latitude.to_radians().cos()));
    (latitude + d_lat, longitude + d_lng)
}
