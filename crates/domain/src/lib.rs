//! Domain layer for the Safe Zones backend.
//!
//! This crate contains:
//! - Domain models (User, Zone, Device, permissions, events)
//! - Business logic services (mock geofence event generation)

pub mod models;
pub mod services;
