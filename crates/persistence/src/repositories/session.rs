//! Session repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::{SessionEntity, SessionUserEntity};
use crate::metrics::QueryTimer;

/// Repository for session-related database operations.
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Creates a new SessionRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a session for a user. Only the token hash is stored.
    pub async fn create(
        &self,
        user_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<SessionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_session");
        let result = sqlx::query_as::<_, SessionEntity>(
            r#"
            INSERT INTO sessions (user_id, token_hash, expires_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(token_hash)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Look up an unexpired session by token hash, joined with its user.
    pub async fn find_valid_by_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionUserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_session_by_hash");
        let result = sqlx::query_as::<_, SessionUserEntity>(
            r#"
            SELECT s.id AS session_id, u.id AS user_id, u.phone, u.role, s.expires_at
            FROM sessions s
            JOIN users u ON u.id = s.user_id
            WHERE s.token_hash = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Record session activity.
    pub async fn touch(&self, session_id: i64) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("touch_session");
        sqlx::query(
            r#"
            UPDATE sessions SET last_used_at = NOW() WHERE id = $1
            "#,
        )
        .bind(session_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Delete a session by token hash (logout).
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete_by_hash(&self, token_hash: &str) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_session_by_hash");
        let result = sqlx::query(
            r#"
            DELETE FROM sessions WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Delete all expired sessions.
    /// Returns the number of rows deleted.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_expired_sessions");
        let result = sqlx::query(
            r#"
            DELETE FROM sessions WHERE expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }
}
