//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod device;
pub mod device_permission;
pub mod session;
pub mod user;
pub mod zone;
pub mod zone_device;

pub use device::DeviceEntity;
pub use device_permission::DevicePermissionEntity;
pub use session::{SessionEntity, SessionUserEntity};
pub use user::UserEntity;
pub use zone::ZoneEntity;
pub use zone_device::ZoneDeviceEntity;
