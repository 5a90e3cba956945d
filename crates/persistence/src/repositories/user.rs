//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_id");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, phone, role, otp_code, otp_expires_at, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by phone number.
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_phone");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, phone, role, otp_code, otp_expires_at, created_at, updated_at
            FROM users
            WHERE phone = $1
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Create a new user account.
    pub async fn create(&self, phone: &str, role: &str) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (phone, role)
            VALUES ($1, $2)
            RETURNING id, phone, role, otp_code, otp_expires_at, created_at, updated_at
            "#,
        )
        .bind(phone)
        .bind(role)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Store a fresh OTP credential, replacing any pending one.
    pub async fn set_otp(
        &self,
        user_id: i64,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("set_user_otp");
        sqlx::query(
            r#"
            UPDATE users
            SET otp_code = $2, otp_expires_at = $3, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(code)
        .bind(expires_at)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Clear the stored OTP credential (single-use enforcement).
    pub async fn clear_otp(&self, user_id: i64) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("clear_user_otp");
        sqlx::query(
            r#"
            UPDATE users
            SET otp_code = NULL, otp_expires_at = NULL, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(())
    }

    /// Count all user accounts.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_users");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        timer.record();
        Ok(count.0)
    }
}
