//! Shared utilities and common types for the Safe Zones backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Cryptographic utilities (session token generation, hashing)
//! - Common validation logic

pub mod crypto;
pub mod validation;
