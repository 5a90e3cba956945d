//! HTTP route handlers.

pub mod auth;
pub mod devices;
pub mod geofence_events;
pub mod health;
pub mod i18n;
pub mod permissions;
pub mod themes;
pub mod zones;
