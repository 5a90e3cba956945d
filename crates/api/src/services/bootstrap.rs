//! Bootstrap seeding for an empty database.
//!
//! Creates the three default role accounts, sample devices and zones,
//! and the default device permission matrix. Runs on startup after
//! migrations and is idempotent: user/device/zone seeding is skipped as
//! soon as any user exists, matrix seeding as soon as any matrix row
//! exists.

use sqlx::PgPool;
use tracing::info;

use domain::models::user::UserRole;
use persistence::repositories::{
    DevicePermissionRepository, DeviceRepository, UserRepository, ZoneDeviceRepository,
    ZoneRepository,
};

/// Default accounts seeded for each role.
pub const DEFAULT_ADMIN_PHONE: &str = "+48123456789";
pub const DEFAULT_USER_PHONE: &str = "+48987654321";
pub const DEFAULT_VIEWER_PHONE: &str = "+48555666777";

/// Default visibility matrix: (device name, role, allowed).
const DEFAULT_MATRIX: [(&str, UserRole, bool); 9] = [
    ("Phone SOS", UserRole::Admin, true),
    ("Phone SOS", UserRole::User, true),
    ("Phone SOS", UserRole::Viewer, false),
    ("GJD.13 Watch", UserRole::Admin, true),
    ("GJD.13 Watch", UserRole::User, true),
    ("GJD.13 Watch", UserRole::Viewer, false),
    ("BS.07 Band", UserRole::Admin, true),
    ("BS.07 Band", UserRole::User, false),
    ("BS.07 Band", UserRole::Viewer, false),
];

/// Seed default data if the database is empty.
pub async fn seed_default_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    seed_permission_matrix(pool).await?;

    let users = UserRepository::new(pool.clone());
    if users.count().await? > 0 {
        info!("Data already exists, skipping bootstrap seeding");
        return Ok(());
    }

    let devices = DeviceRepository::new(pool.clone());
    let zones = ZoneRepository::new(pool.clone());
    let zone_devices = ZoneDeviceRepository::new(pool.clone());

    let admin = users
        .create(DEFAULT_ADMIN_PHONE, UserRole::Admin.as_str())
        .await?;
    let user = users
        .create(DEFAULT_USER_PHONE, UserRole::User.as_str())
        .await?;
    let viewer = users
        .create(DEFAULT_VIEWER_PHONE, UserRole::Viewer.as_str())
        .await?;

    let admin_phone = devices
        .create(admin.id, "Phone", "iPhone 15", "Admin User")
        .await?;
    let user_phone = devices
        .create(user.id, "Phone", "Samsung Galaxy S24", "Regular User")
        .await?;
    let child_watch = devices
        .create(user.id, "Child Watch", "KidsGuard Pro", "Emma (Child)")
        .await?;
    let senior_band = devices
        .create(user.id, "Senior Band", "HealthTracker 3000", "John (Senior)")
        .await?;
    devices
        .create(viewer.id, "Phone", "Google Pixel 8", "Viewer User")
        .await?;

    let home = zones
        .create(
            admin.id,
            "Home",
            "🏠",
            "123 Main Street, Warsaw, Poland",
            52.2297,
            21.0122,
            100,
            true,
        )
        .await?;
    let school = zones
        .create(
            admin.id,
            "School",
            "🏫",
            "456 Education Ave, Warsaw, Poland",
            52.2370,
            21.0175,
            200,
            true,
        )
        .await?;

    zone_devices.create(home.id, admin_phone.id, true).await?;
    zone_devices.create(home.id, user_phone.id, true).await?;
    zone_devices.create(home.id, child_watch.id, true).await?;
    zone_devices.create(home.id, senior_band.id, true).await?;

    zone_devices.create(school.id, child_watch.id, true).await?;
    // Notifications disabled for this device at school
    zone_devices.create(school.id, user_phone.id, false).await?;

    info!("Bootstrap seeding completed: 3 users, 5 devices, 2 zones");
    Ok(())
}

/// Seed the default permission matrix if none exists.
async fn seed_permission_matrix(pool: &PgPool) -> Result<(), sqlx::Error> {
    let permissions = DevicePermissionRepository::new(pool.clone());
    if permissions.count().await? > 0 {
        return Ok(());
    }

    for (device_name, role, allowed) in DEFAULT_MATRIX {
        permissions.upsert(device_name, role.as_str(), allowed).await?;
    }

    info!("Seeded default device permission matrix");
    Ok(())
}
