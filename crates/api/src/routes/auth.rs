//! Authentication endpoint handlers.

use axum::{extract::State, http::HeaderMap, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::CurrentUser;
use domain::models::user::{PermissionsResponse, UserRole};

/// Request body for requesting an OTP.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,
}

/// Response for a successful OTP request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub message: String,
    /// Present only when `auth.expose_otp` is enabled (development).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

/// Request body for validating an OTP.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    #[validate(custom(function = "shared::validation::validate_otp_code"))]
    pub otp: String,
}

/// Response for a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub token: String,
    pub user: SessionUserResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub phone: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub message: String,
}

/// Request an OTP for a phone number.
///
/// POST /api/v1/auth/otp/send
pub async fn send_otp(
    State(state): State<AppState>,
    Json(request): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, ApiError> {
    request.validate()?;

    if let Some(ref limiter) = state.otp_limiter {
        if !limiter.check(&request.phone) {
            return Err(ApiError::RateLimited);
        }
    }

    let issued = state
        .auth_service
        .send_otp(&request.phone)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(SendOtpResponse {
        message: "OTP sent successfully".to_string(),
        otp: state.config.auth.expose_otp.then_some(issued.code),
    }))
}

/// Validate an OTP and obtain a session token.
///
/// POST /api/v1/auth/otp/verify
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, ApiError> {
    request.validate()?;

    let grant = state
        .auth_service
        .verify_otp(&request.phone, &request.otp)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .ok_or_else(|| ApiError::Unauthorized("Invalid OTP".to_string()))?;

    Ok(Json(VerifyOtpResponse {
        success: true,
        token: grant.token,
        user: SessionUserResponse {
            phone: grant.user.phone,
            role: grant.user.role,
        },
    }))
}

/// End the presented session.
///
/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, ApiError> {
    let token = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing session token".to_string()))?;

    state
        .auth_service
        .logout(token)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!(phone = %user.phone, "User logged out");
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Permission set of the calling user.
///
/// GET /api/v1/auth/me
///
/// Without a valid session this returns the anonymous VIEWER set rather
/// than 401, so unauthenticated clients can render a read-only view.
pub async fn me(user: Option<Extension<CurrentUser>>) -> Json<PermissionsResponse> {
    match user {
        Some(Extension(user)) => Json(PermissionsResponse::new(user.role, user.phone)),
        None => Json(PermissionsResponse::anonymous()),
    }
}
