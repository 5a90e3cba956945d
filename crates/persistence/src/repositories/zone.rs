//! Zone repository for database operations.
//!
//! Every query that targets a single zone is scoped by owner
//! (`WHERE id = $1 AND user_id = $2`). That scoping is the
//! authorization boundary for zones: a zone owned by someone else is
//! indistinguishable from a missing one.

use sqlx::PgPool;

use crate::entities::ZoneEntity;
use crate::metrics::QueryTimer;

/// Repository for zone-related database operations.
#[derive(Clone)]
pub struct ZoneRepository {
    pool: PgPool,
}

impl ZoneRepository {
    /// Creates a new ZoneRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new zone.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: i64,
        name: &str,
        icon: &str,
        address: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: i32,
        notifications_enabled: bool,
    ) -> Result<ZoneEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_zone");
        let result = sqlx::query_as::<_, ZoneEntity>(
            r#"
            INSERT INTO zones (user_id, name, icon, address, latitude, longitude,
                               radius_meters, notifications_enabled)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(icon)
        .bind(address)
        .bind(latitude)
        .bind(longitude)
        .bind(radius_meters)
        .bind(notifications_enabled)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a zone by id, scoped to its owner.
    pub async fn find_by_id_and_user(
        &self,
        id: i64,
        user_id: i64,
    ) -> Result<Option<ZoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_zone_by_id_and_user");
        let result = sqlx::query_as::<_, ZoneEntity>(
            r#"
            SELECT * FROM zones WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find all zones of a user, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<ZoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_zones_by_user");
        let result = sqlx::query_as::<_, ZoneEntity>(
            r#"
            SELECT * FROM zones
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Overwrite a zone's mutable fields in place.
    ///
    /// Omitted coordinates preserve the stored values. Returns None when
    /// the zone does not exist or belongs to a different user.
    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: i64,
        user_id: i64,
        name: &str,
        icon: &str,
        address: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
        radius_meters: i32,
    ) -> Result<Option<ZoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_zone");
        let result = sqlx::query_as::<_, ZoneEntity>(
            r#"
            UPDATE zones SET
                name = $3,
                icon = $4,
                address = $5,
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude),
                radius_meters = $8,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(name)
        .bind(icon)
        .bind(address)
        .bind(latitude)
        .bind(longitude)
        .bind(radius_meters)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Flip the zone-level notifications flag, scoped to the owner.
    pub async fn set_notifications_enabled(
        &self,
        id: i64,
        user_id: i64,
        enabled: bool,
    ) -> Result<Option<ZoneEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_zone_notifications");
        let result = sqlx::query_as::<_, ZoneEntity>(
            r#"
            UPDATE zones SET
                notifications_enabled = $3,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(enabled)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a zone, scoped to the owner.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64, user_id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_zone");
        let result = sqlx::query(
            r#"
            DELETE FROM zones WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Count zones owned by a user.
    pub async fn count_by_user(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_zones_by_user");
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM zones WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        timer.record();
        Ok(count.0)
    }
}
