//! OTP issuance rate limiting.
//!
//! Limits how often a single phone number can request an OTP code,
//! using one governor rate limiter per phone.

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovRateLimiter,
};
use std::{
    collections::HashMap,
    num::NonZeroU32,
    sync::{Arc, RwLock},
};

/// Type alias for the rate limiter used per phone number.
type PhoneRateLimiter = GovRateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Rate limiter state shared across all requests.
/// Uses a HashMap keyed by phone number with individual rate limiters.
pub struct OtpRateLimiter {
    limiters: RwLock<HashMap<String, Arc<PhoneRateLimiter>>>,
    requests_per_minute: u32,
}

impl OtpRateLimiter {
    /// Create a new rate limiter state with the specified limit per minute.
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            limiters: RwLock::new(HashMap::new()),
            requests_per_minute,
        }
    }

    /// Get or create a rate limiter for the given phone number.
    fn get_or_create_limiter(&self, phone: &str) -> Arc<PhoneRateLimiter> {
        // First try to get existing limiter with read lock
        {
            let limiters = self.limiters.read().unwrap();
            if let Some(limiter) = limiters.get(phone) {
                return limiter.clone();
            }
        }

        // Create new limiter with write lock
        let mut limiters = self.limiters.write().unwrap();

        // Double-check in case another thread created it
        if let Some(limiter) = limiters.get(phone) {
            return limiter.clone();
        }

        let quota = Quota::per_minute(
            NonZeroU32::new(self.requests_per_minute).unwrap_or(NonZeroU32::new(5).unwrap()),
        );
        let limiter = Arc::new(GovRateLimiter::direct(quota));
        limiters.insert(phone.to_string(), limiter.clone());
        limiter
    }

    /// Check whether an OTP request for the given phone should be allowed.
    pub fn check(&self, phone: &str) -> bool {
        self.get_or_create_limiter(phone).check().is_ok()
    }
}

impl std::fmt::Debug for OtpRateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtpRateLimiter")
            .field("requests_per_minute", &self.requests_per_minute)
            .field("active_limiters", &self.limiters.read().unwrap().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limiter_allows_requests() {
        let limiter = OtpRateLimiter::new(5);
        assert!(limiter.check("+48123456789"));
    }

    #[test]
    fn test_rate_limiter_exhaustion() {
        let limiter = OtpRateLimiter::new(1);
        assert!(limiter.check("+48123456789"));
        assert!(!limiter.check("+48123456789"));
    }

    #[test]
    fn test_rate_limiter_phones_are_independent() {
        let limiter = OtpRateLimiter::new(1);
        assert!(limiter.check("+48123456789"));
        assert!(limiter.check("+48987654321"));
        assert!(!limiter.check("+48123456789"));
        assert!(!limiter.check("+48987654321"));
    }

    #[test]
    fn test_rate_limiter_allows_up_to_quota() {
        let limiter = OtpRateLimiter::new(5);
        for i in 0..5 {
            assert!(limiter.check("+48111111111"), "Request {} should be allowed", i);
        }
        assert!(!limiter.check("+48111111111"));
    }

    #[test]
    fn test_get_or_create_idempotent() {
        let limiter = OtpRateLimiter::new(5);
        let a = limiter.get_or_create_limiter("+48123456789");
        let b = limiter.get_or_create_limiter("+48123456789");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_rate_limiter_debug() {
        let limiter = OtpRateLimiter::new(5);
        limiter.check("+48123456789");
        let debug = format!("{:?}", limiter);
        assert!(debug.contains("OtpRateLimiter"));
        assert!(debug.contains("active_limiters"));
    }
}
