//! Device endpoint handlers.
//!
//! Devices are read-only through the API; they are seeded at bootstrap
//! or created by administrators out of band.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use persistence::repositories::{DevicePermissionRepository, DeviceRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use domain::models::device::{DeviceResponse, ListDevicesResponse};
use domain::models::permission::{AvailableDeviceResponse, AvailableDevicesResponse, DEVICE_CATALOG};

/// List the calling user's devices.
///
/// GET /api/v1/devices
pub async fn list_devices(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<ListDevicesResponse>, ApiError> {
    let device_repo = DeviceRepository::new(state.pool.clone());
    let entities = device_repo.find_by_user(user.id).await?;

    let devices: Vec<DeviceResponse> = entities
        .into_iter()
        .map(|entity| domain::models::Device::from(entity).into())
        .collect();

    let total = devices.len();
    Ok(Json(ListDevicesResponse { devices, total }))
}

/// Get a single device by ID, scoped to the owner.
///
/// GET /api/v1/devices/:id
pub async fn get_device(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<DeviceResponse>, ApiError> {
    let device_repo = DeviceRepository::new(state.pool.clone());
    let entity = device_repo
        .find_by_id_and_user(id, user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Device not found".to_string()))?;

    Ok(Json(domain::models::Device::from(entity).into()))
}

/// Catalog devices the calling role may see.
///
/// GET /api/v1/devices/available
pub async fn available_devices(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<AvailableDevicesResponse>, ApiError> {
    let permission_repo = DevicePermissionRepository::new(state.pool.clone());
    let allowed = permission_repo
        .find_allowed_names(user.role.as_str())
        .await?;

    let devices: Vec<AvailableDeviceResponse> = DEVICE_CATALOG
        .into_iter()
        .filter(|device| allowed.iter().any(|name| name == device.name))
        .map(Into::into)
        .collect();

    let total = devices.len();
    Ok(Json(AvailableDevicesResponse { devices, total }))
}
