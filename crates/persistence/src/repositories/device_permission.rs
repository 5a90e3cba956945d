//! Device permission repository.
//!
//! Persists the role visibility matrix so admin updates survive
//! restarts.

use sqlx::PgPool;

use crate::entities::DevicePermissionEntity;
use crate::metrics::QueryTimer;

/// Repository for the device permission matrix.
#[derive(Clone)]
pub struct DevicePermissionRepository {
    pool: PgPool,
}

impl DevicePermissionRepository {
    /// Creates a new DevicePermissionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The full matrix, in stable (device, role) order.
    pub async fn find_all(&self) -> Result<Vec<DevicePermissionEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_device_permissions");
        let result = sqlx::query_as::<_, DevicePermissionEntity>(
            r#"
            SELECT * FROM device_permissions
            ORDER BY device_name, role
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Names of devices a role is allowed to see.
    pub async fn find_allowed_names(&self, role: &str) -> Result<Vec<String>, sqlx::Error> {
        let timer = QueryTimer::new("find_allowed_device_names");
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT device_name FROM device_permissions
            WHERE role = $1 AND allowed = true
            ORDER BY device_name
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Upsert one (device, role) cell of the matrix.
    pub async fn upsert(
        &self,
        device_name: &str,
        role: &str,
        allowed: bool,
    ) -> Result<DevicePermissionEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_device_permission");
        let result = sqlx::query_as::<_, DevicePermissionEntity>(
            r#"
            INSERT INTO device_permissions (device_name, role, allowed)
            VALUES ($1, $2, $3)
            ON CONFLICT (device_name, role)
            DO UPDATE SET allowed = EXCLUDED.allowed, updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(device_name)
        .bind(role)
        .bind(allowed)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Count matrix rows.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_device_permissions");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM device_permissions")
            .fetch_one(&self.pool)
            .await?;
        timer.record();
        Ok(count.0)
    }
}
