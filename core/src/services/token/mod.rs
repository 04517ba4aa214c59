//! Token service module for JWT verification
//!
//! This module handles verification of tokens issued elsewhere:
//! - HMAC signature and expiry checks
//! - Subject and role extraction
//! - Subject matching against an expected identity

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenClaimsService;
