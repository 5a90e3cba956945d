//! Zone/device association repository.
//!
//! The zone_devices join table is the single source of truth for which
//! devices belong to a zone.

use sqlx::PgPool;

use crate::entities::ZoneDeviceEntity;
use crate::metrics::QueryTimer;

/// Repository for zone/device association operations.
#[derive(Clone)]
pub struct ZoneDeviceRepository {
    pool: PgPool,
}

impl ZoneDeviceRepository {
    /// Creates a new ZoneDeviceRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace a zone's device associations with the given set.
    ///
    /// Runs in a transaction so readers never observe a half-replaced
    /// set. New associations start with notifications enabled.
    pub async fn replace_for_zone(
        &self,
        zone_id: i64,
        device_ids: &[i64],
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("replace_zone_devices");
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM zone_devices WHERE zone_id = $1")
            .bind(zone_id)
            .execute(&mut *tx)
            .await?;

        for device_id in device_ids {
            sqlx::query(
                r#"
                INSERT INTO zone_devices (zone_id, device_id, notifications_enabled)
                VALUES ($1, $2, true)
                ON CONFLICT (zone_id, device_id) DO NOTHING
                "#,
            )
            .bind(zone_id)
            .bind(device_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        timer.record();
        Ok(())
    }

    /// Insert one association with an explicit notification override.
    pub async fn create(
        &self,
        zone_id: i64,
        device_id: i64,
        notifications_enabled: bool,
    ) -> Result<ZoneDeviceEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_zone_device");
        let result = sqlx::query_as::<_, ZoneDeviceEntity>(
            r#"
            INSERT INTO zone_devices (zone_id, device_id, notifications_enabled)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(zone_id)
        .bind(device_id)
        .bind(notifications_enabled)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Device ids associated with a zone, in stable order.
    pub async fn find_device_ids_by_zone(&self, zone_id: i64) -> Result<Vec<i64>, sqlx::Error> {
        let timer = QueryTimer::new("find_zone_device_ids");
        let rows: Vec<(i64,)> = sqlx::query_as(
            r#"
            SELECT device_id FROM zone_devices
            WHERE zone_id = $1
            ORDER BY device_id
            "#,
        )
        .bind(zone_id)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    /// All (zone_id, device_id) pairs across a user's zones.
    pub async fn find_pairs_by_user(&self, user_id: i64) -> Result<Vec<(i64, i64)>, sqlx::Error> {
        let timer = QueryTimer::new("find_zone_device_pairs_by_user");
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT zd.zone_id, zd.device_id
            FROM zone_devices zd
            JOIN zones z ON z.id = zd.zone_id
            WHERE z.user_id = $1
            ORDER BY zd.zone_id, zd.device_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        timer.record();
        Ok(rows)
    }

    /// Total association rows across a user's zones.
    pub async fn count_by_user(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_zone_devices_by_user");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM zone_devices zd
            JOIN zones z ON z.id = zd.zone_id
            WHERE z.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0)
    }
}
