//! Device repository for database operations.

use sqlx::PgPool;

use crate::entities::DeviceEntity;
use crate::metrics::QueryTimer;

/// Repository for device-related database operations.
#[derive(Clone)]
pub struct DeviceRepository {
    pool: PgPool,
}

impl DeviceRepository {
    /// Creates a new DeviceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new device.
    pub async fn create(
        &self,
        user_id: i64,
        kind: &str,
        model: &str,
        owner_name: &str,
    ) -> Result<DeviceEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_device");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            INSERT INTO devices (user_id, kind, model, owner_name)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(kind)
        .bind(model)
        .bind(owner_name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a device by id, scoped to its owner.
    pub async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<Option<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_device_by_id_and_user");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT * FROM devices WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all devices of a user.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_devices_by_user");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT * FROM devices
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find the subset of `ids` owned by the user.
    ///
    /// Callers compare the result length against `ids.len()` to detect
    /// references to foreign or missing devices.
    pub async fn find_by_ids_and_user(
        &self,
        ids: &[i64],
        user_id: i64,
    ) -> Result<Vec<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_devices_by_ids_and_user");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT * FROM devices
            WHERE id = ANY($1) AND user_id = $2
            ORDER BY id
            "#,
        )
        .bind(ids)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find devices by id regardless of owner.
    ///
    /// Used to resolve display names when attributing generated events.
    pub async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<DeviceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_devices_by_ids");
        let result = sqlx::query_as::<_, DeviceEntity>(
            r#"
            SELECT * FROM devices
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
