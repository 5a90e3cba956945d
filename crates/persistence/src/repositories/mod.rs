//! Repository implementations for database operations.

pub mod device;
pub mod device_permission;
pub mod session;
pub mod user;
pub mod zone;
pub mod zone_device;

pub use device::DeviceRepository;
pub use device_permission::DevicePermissionRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
pub use zone::ZoneRepository;
pub use zone_device::ZoneDeviceRepository;
