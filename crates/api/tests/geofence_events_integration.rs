//! Integration tests for mock geofence event generation.

mod common;

use axum::http::{Method, StatusCode};
use common::*;
use tower::ServiceExt;

async fn create_zone(app: &axum::Router, token: &str, devices: &[i64]) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request_with_auth(
            Method::POST,
            "/api/v1/zones",
            zone_payload("Home", devices),
            token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    parse_response_body(response).await["id"].as_i64().unwrap()
}

#[tokio::test]
async fn test_generates_requested_number_of_events() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;
    let zone_id = create_zone(&app, &auth.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=5", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 5);
    let events = body["events"].as_array().unwrap();
    assert_eq!(events.len(), 5);

    for event in events {
        assert_eq!(event["zoneId"].as_i64().unwrap(), zone_id);
        assert_eq!(event["zoneName"], "Home");
        assert_eq!(event["radiusMeters"], 100);
        let event_type = event["eventType"].as_str().unwrap();
        assert!(event_type == "ENTER" || event_type == "EXIT");
        assert!(event["occurredAt"].is_string());
    }
}

#[tokio::test]
async fn test_zone_without_devices_yields_virtual_device() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;
    let zone_id = create_zone(&app, &auth.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=8", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    for event in body["events"].as_array().unwrap() {
        assert!(event["deviceId"].as_str().unwrap().starts_with("virtual-"));
        assert_eq!(event["deviceName"], "Device virtual-1");
    }
}

#[tokio::test]
async fn test_events_use_associated_device_names() {
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
    let device = create_test_device(&pool, user_id, "KidsGuard Pro").await;
    let zone_id = create_zone(&app, &auth.token, &[device]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=6", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    for event in body["events"].as_array().unwrap() {
        assert_eq!(event["deviceId"], device.to_string());
        assert_eq!(event["deviceName"], "KidsGuard Pro");
    }
}

#[tokio::test]
async fn test_jittered_coordinates_stay_near_zone_center() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;
    // radius 100 m -> jitter bounded by 20 m per axis
    let zone_id = create_zone(&app, &auth.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=50", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;

    let lat0 = 52.2297_f64;
    let lng0 = 21.0122_f64;
    for event in body["events"].as_array().unwrap() {
        let lat = event["latitude"].as_f64().unwrap();
        let lng = event["longitude"].as_f64().unwrap();
        let lat_m = (lat - lat0).abs() * 111_000.0;
        let lng_m = (lng - lng0).abs() * 111_320.0 * lat0.to_radians().cos();
        assert!(lat_m <= 20.0 + 1e-6, "latitude offset {} m", lat_m);
        assert!(lng_m <= 20.0 + 1e-6, "longitude offset {} m", lng_m);
    }
}

#[tokio::test]
async fn test_unknown_zone_is_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;

    let response = app
        .oneshot(get_request_with_auth(
            "/api/v1/zones/999999999/events?count=5",
            &auth.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_foreign_zone_is_not_found() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let owner = login(&app, &unique_test_phone()).await;
    let stranger = login(&app, &unique_test_phone()).await;
    let zone_id = create_zone(&app, &owner.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=5", zone_id),
            &stranger.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_zero_count_still_yields_one_event() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;
    let zone_id = create_zone(&app, &auth.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events?count=0", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_count_defaults_to_ten() {
    let pool = create_test_pool().await;
    run_migrations(&pool).await;
    let app = create_test_app(test_config(), pool);

    let auth = login(&app, &unique_test_phone()).await;
    let zone_id = create_zone(&app, &auth.token, &[]).await;

    let response = app
        .oneshot(get_request_with_auth(
            &format!("/api/v1/zones/{}/events", zone_id),
            &auth.token,
        ))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total"], 10);
}
