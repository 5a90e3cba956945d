//! Session authentication middleware.
//!
//! Validates the opaque bearer token against the sessions table. Only
//! the SHA-256 of a token is stored, so the lookup hashes the presented
//! token and compares hashes.

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use persistence::repositories::SessionRepository;
use shared::crypto::{is_session_token, sha256_hex};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::user::UserRole;

/// Authenticated user attached to the request after session validation.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub phone: String,
    pub role: UserRole,
}

/// Middleware that requires a valid session.
///
/// Rejects requests without a valid bearer token. The authenticated
/// user is stored in request extensions for downstream handlers.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match authenticate(&state, req.headers()).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(err) => err.into_response(),
    }
}

/// Middleware that validates a session when one is presented.
///
/// The request proceeds either way; handlers inspect the extension to
/// decide between the authenticated and anonymous paths.
pub async fn optional_session(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    if let Ok(user) = authenticate(&state, req.headers()).await {
        req.extensions_mut().insert(user);
    }
    next.run(req).await
}

/// Resolves the bearer token on a request to its user.
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            return Err(ApiError::Unauthorized(
                "Missing or invalid Authorization header".into(),
            ))
        }
    };

    // Shape check before touching the database.
    if !is_session_token(token) {
        return Err(ApiError::Unauthorized("Invalid session token".into()));
    }

    let sessions = SessionRepository::new(state.pool.clone());
    let row = sessions
        .find_valid_by_hash(&sha256_hex(token))
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".into()))?;

    // Activity tracking is best-effort; a failed touch must not fail the request.
    if let Err(e) = sessions.touch(row.session_id).await {
        tracing::debug!(session_id = row.session_id, error = %e, "Failed to touch session");
    }

    Ok(CurrentUser {
        id: row.user_id,
        role: row.user_role(),
        phone: row.phone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_clone() {
        let user = CurrentUser {
            id: 1,
            phone: "+48123456789".to_string(),
            role: UserRole::User,
        };
        let cloned = user.clone();
        assert_eq!(cloned.id, user.id);
        assert_eq!(cloned.phone, user.phone);
        assert_eq!(cloned.role, user.role);
    }

    #[test]
    fn test_current_user_debug() {
        let user = CurrentUser {
            id: 1,
            phone: "+48123456789".to_string(),
            role: UserRole::Admin,
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("CurrentUser"));
        assert!(debug_str.contains("Admin"));
    }
}
