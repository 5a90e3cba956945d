//! Phone + OTP authentication service.
//!
//! Owns the OTP lifecycle (generate, deliver, validate once) and
//! session issuance. Generation and delivery are separate concerns: the
//! service always hands the code to an [`OtpSender`]; whether the HTTP
//! response also echoes it is a route-level decision driven by the
//! `auth.expose_otp` configuration flag.

use chrono::{Duration, Utc};
use rand::Rng;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use domain::models::user::{otp_is_valid, User, UserRole};
use persistence::repositories::{SessionRepository, UserRepository};
use shared::crypto::{generate_session_token, sha256_hex};

use crate::config::AuthConfig;
use crate::middleware::metrics::record_otp_issued;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("OTP delivery failed: {0}")]
    Delivery(String),
}

/// Out-of-band OTP transport.
///
/// Production deployments would implement this against an SMS gateway;
/// the default implementation logs the code (development transport).
#[async_trait::async_trait]
pub trait OtpSender: Send + Sync {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), String>;
}

/// Development transport that writes the code to the log.
pub struct ConsoleOtpSender;

#[async_trait::async_trait]
impl OtpSender for ConsoleOtpSender {
    async fn deliver(&self, phone: &str, code: &str) -> Result<(), String> {
        info!(phone = %phone, otp = %code, "OTP issued (console transport)");
        Ok(())
    }
}

/// An OTP that was generated and handed to the sender.
#[derive(Debug)]
pub struct IssuedOtp {
    pub code: String,
}

/// A session granted after successful OTP validation.
#[derive(Debug)]
pub struct SessionGrant {
    pub token: String,
    pub user: User,
}

/// Authentication service over the user and session tables.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    auth_config: AuthConfig,
    sender: Arc<dyn OtpSender>,
}

impl AuthService {
    pub fn new(pool: PgPool, auth_config: AuthConfig, sender: Arc<dyn OtpSender>) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool),
            auth_config,
            sender,
        }
    }

    /// Generate and deliver an OTP for a phone number.
    ///
    /// Creates a USER-role account on first contact. Any pending code is
    /// replaced; the expiry is absolute (`now + otp_ttl_secs`).
    pub async fn send_otp(&self, phone: &str) -> Result<IssuedOtp, AuthError> {
        let user = match self.users.find_by_phone(phone).await? {
            Some(user) => user,
            None => {
                info!(phone = %phone, "Creating account on first OTP request");
                self.users.create(phone, UserRole::User.as_str()).await?
            }
        };

        let code = generate_otp_code(&mut rand::thread_rng());
        let expires_at = Utc::now() + Duration::seconds(self.auth_config.otp_ttl_secs);
        self.users.set_otp(user.id, &code, expires_at).await?;
        record_otp_issued();

        self.sender
            .deliver(phone, &code)
            .await
            .map_err(AuthError::Delivery)?;

        Ok(IssuedOtp { code })
    }

    /// Validate an OTP and issue a session on success.
    ///
    /// Returns `Ok(None)` for every failure mode (unknown phone, wrong
    /// code, missing or expired code); callers cannot distinguish them.
    /// A validated code is cleared before the session is issued, so it
    /// is accepted at most once.
    pub async fn verify_otp(
        &self,
        phone: &str,
        code: &str,
    ) -> Result<Option<SessionGrant>, AuthError> {
        let entity = match self.users.find_by_phone(phone).await? {
            Some(entity) => entity,
            None => {
                warn!(phone = %phone, "OTP validation for unknown phone");
                return Ok(None);
            }
        };

        let user: User = entity.into();
        if !otp_is_valid(
            user.otp_code.as_deref(),
            user.otp_expires_at,
            code,
            Utc::now(),
        ) {
            warn!(phone = %phone, "Invalid or expired OTP");
            return Ok(None);
        }

        // Single use: clear the credential before handing out a session.
        self.users.clear_otp(user.id).await?;

        let token = generate_session_token();
        let expires_at = Utc::now() + Duration::seconds(self.auth_config.session_ttl_secs);
        self.sessions
            .create(user.id, &sha256_hex(&token), expires_at)
            .await?;

        info!(phone = %phone, role = %user.role, "User logged in");
        Ok(Some(SessionGrant { token, user }))
    }

    /// Delete the session behind a bearer token.
    /// Returns whether a session was actually removed.
    pub async fn logout(&self, token: &str) -> Result<bool, AuthError> {
        let deleted = self.sessions.delete_by_hash(&sha256_hex(token)).await?;
        Ok(deleted > 0)
    }
}

/// Uniform random 6-digit zero-padded code.
fn generate_otp_code<R: Rng>(rng: &mut R) -> String {
    format!("{:06}", rng.gen_range(0..1_000_000))
}
