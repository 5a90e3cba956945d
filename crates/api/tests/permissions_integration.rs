//! Integration tests for the device permission matrix and the
//! role-filtered device catalog.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use tower::ServiceExt;

#[tokio::test]
async fn test_viewer_sees_no_catalog_devices_by_default() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    seed_permission_matrix(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let phone = unique_test_phone();
    create_user_with_role(&pool, &phone, "VIEWER").await;
    let viewer = login(&app, &phone).await;

    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/devices/available",
            &viewer.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 0);
}

async fn visible_device_names(app: &axum::Router, token: &str) -> Vec<String> {
    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/devices/available", token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    body["devices"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_admin_can_read_full_matrix() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    seed_permission_matrix(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let phone = unique_test_phone();
    create_user_with_role(&pool, &phone, "ADMIN").await;
    let admin = login(&app, &phone).await;

    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/permissions/devices",
            &admin.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;

    // 3 catalog devices x 3 roles
    assert_eq!(body["permissions"].as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_matrix_controls_catalog_visibility() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    seed_permission_matrix(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let admin_phone = unique_test_phone();
    create_user_with_role(&pool, &admin_phone, "ADMIN").await;
    let admin = login(&app, &admin_phone).await;
    let user = login(&app, &unique_test_phone()).await;

    // Default matrix: USER sees Phone SOS and GJD.13 Watch, not BS.07 Band
    let names = visible_device_names(&app, &user.token).await;
    assert!(names.contains(&"Phone SOS".to_string()));
    assert!(names.contains(&"GJD.13 Watch".to_string()));
    assert!(!names.contains(&"BS.07 Band".to_string()));

    // Grant USER the band
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PUT,
            "/api/v1/permissions/devices",
            serde_json::json!({
                "deviceName": "BS.07 Band",
                "role": "USER",
                "allowed": true,
            }),
            &admin.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let names = visible_device_names(&app, &user.token).await;
    assert!(names.contains(&"BS.07 Band".to_string()));

    // Revoke it again; visibility follows the matrix
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::PUT,
            "/api/v1/permissions/devices",
            serde_json::json!({
                "deviceName": "BS.07 Band",
                "role": "USER",
                "allowed": false,
            }),
            &admin.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let names = visible_device_names(&app, &user.token).await;
    assert!(!names.contains(&"BS.07 Band".to_string()));
}

#[tokio::test]
async fn test_non_admin_cannot_touch_matrix() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    seed_permission_matrix(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let user = login(&app, &unique_test_phone()).await;

    let response = app
        .clone()
        .oneshot(get_request_with_auth(
            "/api/v1/permissions/devices",
            &user.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = app
        .oneshot(json_request_with_auth(
            Method::PUT,
            "/api/v1/permissions/devices",
            serde_json::json!({
                "deviceName": "BS.07 Band",
                "role": "USER",
                "allowed": true,
            }),
            &user.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_update_rejects_unknown_device() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    seed_permission_matrix(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let phone = unique_test_phone();
    create_user_with_role(&pool, &phone, "ADMIN").await;
    let admin = login(&app, &phone).await;

    let response = app
        .oneshot(json_request_with_auth(
            Method::PUT,
            "/api/v1/permissions/devices",
            serde_json::json!({
                "deviceName": "Unknown Gadget",
                "role": "USER",
                "allowed": true,
            }),
            &admin.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_listing_own_devices() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool.clone());

    let phone = unique_test_phone();
    let auth = login(&app, &phone).await;
    let user_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE phone = $1")
        .bind(&phone)
        .fetch_one(&pool)
        .await
        .unwrap();
    let device = create_test_device(&pool, user_id, "iPhone 15").await;

    let response = app
        .clone()
        .oneshot(get_request_with_auth("/api/v1/devices", &auth.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["devices"][0]["model"], "iPhone 15");
    assert_eq!(body["devices"][0]["type"], "Phone");

    // Scoped single fetch works for the owner
    let response = app
        .clone()
        .oneshot(get_request_with_auth(
            &format!("/api/v1/devices/{}", device),
            &auth.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // And is NotFound for a stranger
    let stranger = login(&app, &unique_test_phone()).await;
    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/devices/{}", device),
            &stranger.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_themes_and_i18n_are_public() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let request = axum::http::Request::builder()
        .uri("/api/v1/themes/orange")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["operator"], "Orange");
    assert_eq!(body["backgroundColor"], "#1A202C");

    let request = axum::http::Request::builder()
        .uri("/api/v1/i18n/xx")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    // Unknown languages fall back to English
    assert_eq!(body["zones"], "Zones");
}
