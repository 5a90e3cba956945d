//! Domain models.

pub mod device;
pub mod geofence_event;
pub mod permission;
pub mod theme;
pub mod user;
pub mod zone;
pub mod zone_device;

pub use device::Device;
pub use geofence_event::{GeofenceEvent, GeofenceEventType};
pub use user::{User, UserRole};
pub use zone::Zone;
pub use zone_device::ZoneDevice;
