//! Zone endpoint handlers.
//!
//! All zone reads and writes are scoped to the calling user; a zone
//! owned by someone else behaves exactly like a missing one. Mutations
//! additionally require a role that may manage zones (VIEWER may not).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use persistence::repositories::{DeviceRepository, ZoneDeviceRepository, ZoneRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use domain::models::zone::{
    CreateZoneRequest, ListZonesResponse, UpdateZoneRequest, ZoneResponse, ZoneStatsResponse,
};
use domain::models::Zone;

#[derive(Debug, Deserialize)]
pub struct NotificationsQuery {
    pub enabled: bool,
}

/// Rejects roles that may not create, edit or delete zones.
fn require_zone_manager(user: &CurrentUser) -> Result<(), ApiError> {
    if user.role.can_manage_zones() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Viewers cannot modify zones".to_string(),
        ))
    }
}

/// Ensures every referenced device exists and belongs to the caller.
async fn check_device_ownership(
    state: &AppState,
    user_id: i64,
    device_ids: &[i64],
) -> Result<(), ApiError> {
    if device_ids.is_empty() {
        return Ok(());
    }
    let mut unique = device_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();

    let devices = DeviceRepository::new(state.pool.clone());
    let owned = devices.find_by_ids_and_user(&unique, user_id).await?;
    if owned.len() != unique.len() {
        return Err(ApiError::NotFound("Device not found".to_string()));
    }
    Ok(())
}

/// Create a new zone.
///
/// POST /api/v1/zones
pub async fn create_zone(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<CreateZoneRequest>,
) -> Result<(StatusCode, Json<ZoneResponse>), ApiError> {
    require_zone_manager(&user)?;
    request.validate()?;
    check_device_ownership(&state, user.id, &request.device_ids).await?;

    // Missing coordinates fall back to the configured default center.
    let latitude = request.latitude.unwrap_or(state.config.zones.default_latitude);
    let longitude = request
        .longitude
        .unwrap_or(state.config.zones.default_longitude);

    let zone_repo = ZoneRepository::new(state.pool.clone());
    let entity = zone_repo
        .create(
            user.id,
            &request.name,
            &request.icon,
            &request.address,
            latitude,
            longitude,
            request.radius_meters,
            request.notifications_enabled,
        )
        .await?;

    let association_repo = ZoneDeviceRepository::new(state.pool.clone());
    association_repo
        .replace_for_zone(entity.id, &request.device_ids)
        .await?;

    let zone: Zone = entity.into();
    let response = ZoneResponse::from_parts(zone, request.device_ids.clone());

    info!(
        zone_id = response.id,
        user_id = user.id,
        name = %response.name,
        "Zone created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// List the calling user's zones, newest first.
///
/// GET /api/v1/zones
pub async fn list_zones(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ListZonesResponse>, ApiError> {
    let zone_repo = ZoneRepository::new(state.pool.clone());
    let association_repo = ZoneDeviceRepository::new(state.pool.clone());

    let entities = zone_repo.find_by_user(user.id).await?;
    let pairs = association_repo.find_pairs_by_user(user.id).await?;

    let zones: Vec<ZoneResponse> = entities
        .into_iter()
        .map(|entity| {
            let device_ids: Vec<i64> = pairs
                .iter()
                .filter(|(zone_id, _)| *zone_id == entity.id)
                .map(|(_, device_id)| *device_id)
                .collect();
            ZoneResponse::from_parts(entity.into(), device_ids)
        })
        .collect();

    let total = zones.len();
    Ok(Json(ListZonesResponse { zones, total }))
}

/// Aggregate counters for the calling user.
///
/// GET /api/v1/zones/stats
pub async fn zone_stats(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ZoneStatsResponse>, ApiError> {
    let zone_repo = ZoneRepository::new(state.pool.clone());
    let association_repo = ZoneDeviceRepository::new(state.pool.clone());

    let zone_count = zone_repo.count_by_user(user.id).await?;
    let device_count = association_repo.count_by_user(user.id).await?;

    Ok(Json(ZoneStatsResponse {
        zone_count,
        device_count,
    }))
}

/// Get a single zone by ID.
///
/// GET /api/v1/zones/:id
pub async fn get_zone(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<ZoneResponse>, ApiError> {
    let zone_repo = ZoneRepository::new(state.pool.clone());
    let entity = zone_repo
        .find_by_id_and_user(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Zone not found".to_string()))?;

    let association_repo = ZoneDeviceRepository::new(state.pool.clone());
    let device_ids = association_repo.find_device_ids_by_zone(entity.id).await?;

    Ok(Json(ZoneResponse::from_parts(entity.into(), device_ids)))
}

/// Overwrite a zone's mutable fields.
///
/// PUT /api/v1/zones/:id
pub async fn update_zone(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateZoneRequest>,
) -> Result<Json<ZoneResponse>, ApiError> {
    require_zone_manager(&user)?;
    request.validate()?;
    check_device_ownership(&state, user.id, &request.device_ids).await?;

    let zone_repo = ZoneRepository::new(state.pool.clone());
    let entity = zone_repo
        .update(
            id,
            user.id,
            &request.name,
            &request.icon,
            &request.address,
            request.latitude,
            request.longitude,
            request.radius_meters,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Zone not found".to_string()))?;

    let association_repo = ZoneDeviceRepository::new(state.pool.clone());
    association_repo
        .replace_for_zone(entity.id, &request.device_ids)
        .await?;

    info!(zone_id = entity.id, user_id = user.id, "Zone updated");

    let response = ZoneResponse::from_parts(entity.into(), request.device_ids.clone());
    Ok(Json(response))
}

/// Flip the zone-level notifications flag.
///
/// PUT /api/v1/zones/:id/notifications?enabled=
pub async fn toggle_notifications(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Query(query): Query<NotificationsQuery>,
) -> Result<Json<ZoneResponse>, ApiError> {
    require_zone_manager(&user)?;

    let zone_repo = ZoneRepository::new(state.pool.clone());
    let entity = zone_repo
        .set_notifications_enabled(id, user.id, query.enabled)
        .await?
        .ok_or_else(|| ApiError::NotFound("Zone not found".to_string()))?;

    let association_repo = ZoneDeviceRepository::new(state.pool.clone());
    let device_ids = association_repo.find_device_ids_by_zone(entity.id).await?;

    info!(
        zone_id = entity.id,
        enabled = query.enabled,
        "Zone notifications toggled"
    );

    Ok(Json(ZoneResponse::from_parts(entity.into(), device_ids)))
}

/// Delete a zone.
///
/// DELETE /api/v1/zones/:id
pub async fn delete_zone(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    require_zone_manager(&user)?;

    let zone_repo = ZoneRepository::new(state.pool.clone());
    let rows_affected = zone_repo.delete(id, user.id).await?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Zone not found".to_string()));
    }

    info!(zone_id = id, user_id = user.id, "Zone deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::user::UserRole;

    fn current_user(role: UserRole) -> CurrentUser {
        CurrentUser {
            id: 1,
            phone: "+48123456789".to_string(),
            role,
        }
    }

    #[test]
    fn test_viewer_cannot_manage_zones() {
        assert!(require_zone_manager(&current_user(UserRole::Viewer)).is_err());
        assert!(require_zone_manager(&current_user(UserRole::User)).is_ok());
        assert!(require_zone_manager(&current_user(UserRole::Admin)).is_ok());
    }

    #[test]
    fn test_notifications_query_deserialization() {
        let query: NotificationsQuery =
            serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!query.enabled);
    }
}
