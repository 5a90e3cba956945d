//! Application services.

pub mod auth;
pub mod bootstrap;

pub use auth::{AuthService, ConsoleOtpSender, OtpSender};
