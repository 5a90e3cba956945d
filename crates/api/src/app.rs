use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, optional_session, require_session,
    security_headers_middleware, trace_id, OtpRateLimiter,
};
use crate::routes::{auth, devices, geofence_events, health, i18n, permissions, themes, zones};
use crate::services::{AuthService, ConsoleOtpSender, OtpSender};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub auth_service: AuthService,
    pub otp_limiter: Option<Arc<OtpRateLimiter>>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let sender: Arc<dyn OtpSender> = Arc::new(ConsoleOtpSender);
    create_app_with_sender(config, pool, sender)
}

/// App constructor with an injectable OTP transport, used by tests.
pub fn create_app_with_sender(config: Config, pool: PgPool, sender: Arc<dyn OtpSender>) -> Router {
    let config = Arc::new(config);

    // Rate limiting is disabled when the per-minute quota is 0
    let otp_limiter = if config.security.otp_rate_limit_per_minute > 0 {
        Some(Arc::new(OtpRateLimiter::new(
            config.security.otp_rate_limit_per_minute,
        )))
    } else {
        None
    };

    let auth_service = AuthService::new(pool.clone(), config.auth.clone(), sender);

    let state = AppState {
        pool,
        config: config.clone(),
        auth_service,
        otp_limiter,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Protected routes (require a valid session)
    let protected_routes = Router::new()
        .route("/api/v1/auth/logout", post(auth::logout))
        // Zone routes
        .route("/api/v1/zones", get(zones::list_zones).post(zones::create_zone))
        .route("/api/v1/zones/stats", get(zones::zone_stats))
        .route(
            "/api/v1/zones/:id",
            get(zones::get_zone)
                .put(zones::update_zone)
                .delete(zones::delete_zone),
        )
        .route(
            "/api/v1/zones/:id/notifications",
            put(zones::toggle_notifications),
        )
        .route(
            "/api/v1/zones/:id/events",
            get(geofence_events::generate_events),
        )
        // Device routes
        .route("/api/v1/devices", get(devices::list_devices))
        .route("/api/v1/devices/available", get(devices::available_devices))
        .route("/api/v1/devices/:id", get(devices::get_device))
        // Admin permission matrix
        .route(
            "/api/v1/permissions/devices",
            get(permissions::get_matrix).put(permissions::update_matrix),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Session is optional here: anonymous callers get the VIEWER set
    let me_route = Router::new()
        .route("/api/v1/auth/me", get(auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_session,
        ));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler))
        .route("/api/v1/auth/otp/send", post(auth::send_otp))
        .route("/api/v1/auth/otp/verify", post(auth::verify_otp))
        .route("/api/v1/themes/:operator", get(themes::get_theme))
        .route("/api/v1/i18n/:lang", get(i18n::get_translations));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(me_route)
        .merge(protected_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
