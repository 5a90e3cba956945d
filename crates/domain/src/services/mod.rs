//! Domain services.

pub mod geofence_sim;
