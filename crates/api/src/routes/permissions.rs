//! Device permission matrix endpoint handlers (admin only).

use axum::{extract::State, Extension, Json};
use tracing::{info, warn};
use validator::Validate;

use persistence::repositories::DevicePermissionRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use domain::models::permission::{
    is_catalog_device, PermissionMatrixResponse, UpdateDevicePermissionRequest,
};

/// Rejects non-admin callers.
fn require_admin(user: &CurrentUser) -> Result<(), ApiError> {
    if user.role.can_manage_devices() {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "Admin role required".to_string(),
        ))
    }
}

/// The full device permission matrix.
///
/// GET /api/v1/permissions/devices
pub async fn get_matrix(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<PermissionMatrixResponse>, ApiError> {
    require_admin(&user)?;

    let permission_repo = DevicePermissionRepository::new(state.pool.clone());
    let permissions = permission_repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PermissionMatrixResponse { permissions }))
}

/// Flip one (device, role) cell of the matrix.
///
/// PUT /api/v1/permissions/devices
pub async fn update_matrix(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<UpdateDevicePermissionRequest>,
) -> Result<Json<PermissionMatrixResponse>, ApiError> {
    require_admin(&user)?;
    request.validate()?;

    if !is_catalog_device(&request.device_name) {
        warn!(device = %request.device_name, "Permission update for unknown device");
        return Err(ApiError::NotFound("Device not found".to_string()));
    }

    let permission_repo = DevicePermissionRepository::new(state.pool.clone());
    permission_repo
        .upsert(&request.device_name, request.role.as_str(), request.allowed)
        .await?;

    info!(
        device = %request.device_name,
        role = %request.role,
        allowed = request.allowed,
        "Device permission updated"
    );

    let permissions = permission_repo
        .find_all()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PermissionMatrixResponse { permissions }))
}
