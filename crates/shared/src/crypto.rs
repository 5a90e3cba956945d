//! Cryptographic utilities for session token generation and hashing.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// Prefix carried by every session token.
pub const SESSION_TOKEN_PREFIX: &str = "sz_";

/// Number of random bytes backing a session token.
const SESSION_TOKEN_BYTES: usize = 32;

/// Computes SHA-256 hash of the input and returns it as a hex string.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}

/// Generates a new opaque session token: `sz_` followed by 32 random
/// bytes encoded as URL-safe base64. Only the SHA-256 of the token is
/// ever stored.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    format!("{}{}", SESSION_TOKEN_PREFIX, URL_SAFE_NO_PAD.encode(bytes))
}

/// Checks that a presented token has the expected shape before any
/// database lookup is attempted.
pub fn is_session_token(token: &str) -> bool {
    token.starts_with(SESSION_TOKEN_PREFIX) && token.len() > SESSION_TOKEN_PREFIX.len() + 16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex() {
        let hash = sha256_hex("test");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn test_sha256_hex_deterministic() {
        assert_eq!(sha256_hex("same_input"), sha256_hex("same_input"));
    }

    #[test]
    fn test_sha256_hex_different_inputs() {
        assert_ne!(sha256_hex("input1"), sha256_hex("input2"));
    }

    #[test]
    fn test_generate_session_token_shape() {
        let token = generate_session_token();
        assert!(token.starts_with(SESSION_TOKEN_PREFIX));
        assert!(is_session_token(&token));
        // 32 bytes -> 43 base64url chars
        assert_eq!(token.len(), SESSION_TOKEN_PREFIX.len() + 43);
    }

    #[test]
    fn test_generate_session_token_unique() {
        assert_ne!(generate_session_token(), generate_session_token());
    }

    #[test]
    fn test_is_session_token_rejects_garbage() {
        assert!(!is_session_token(""));
        assert!(!is_session_token("sz_"));
        assert!(!is_session_token("sz_short"));
        assert!(!is_session_token("bearer-something-else"));
    }
}
