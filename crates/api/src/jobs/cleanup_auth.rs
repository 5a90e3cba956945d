//! Expired credential cleanup background job.

use sqlx::PgPool;
use tracing::info;

use super::scheduler::{Job, JobFrequency};

/// Background job that removes expired sessions and clears stale OTP
/// codes. Expired credentials are already rejected at validation time;
/// this keeps the tables from accumulating dead rows.
pub struct CleanupAuthJob {
    pool: PgPool,
}

impl CleanupAuthJob {
    /// Create a new cleanup job.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Delete sessions past their expiry.
    async fn delete_expired_sessions(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM sessions WHERE expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Clear OTP credentials past their expiry.
    async fn clear_expired_otps(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET otp_code = NULL, otp_expires_at = NULL
            WHERE otp_expires_at IS NOT NULL AND otp_expires_at < NOW()
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait::async_trait]
impl Job for CleanupAuthJob {
    fn name(&self) -> &'static str {
        "cleanup_auth"
    }

    fn frequency(&self) -> JobFrequency {
        JobFrequency::Hourly
    }

    async fn execute(&self) -> Result<(), String> {
        let sessions_deleted = self
            .delete_expired_sessions()
            .await
            .map_err(|e| format!("Failed to delete expired sessions: {}", e))?;

        if sessions_deleted > 0 {
            info!(deleted = sessions_deleted, "Cleaned up expired sessions");
        }

        let otps_cleared = self
            .clear_expired_otps()
            .await
            .map_err(|e| format!("Failed to clear expired OTP codes: {}", e))?;

        if otps_cleared > 0 {
            info!(cleared = otps_cleared, "Cleared expired OTP codes");
        }

        Ok(())
    }
}
