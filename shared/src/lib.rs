//! Shared utilities and common types for the product catalog server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error response structures and error codes
//! - API response envelopes

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    DatabaseConfig, JwtConfig, StorageConfig,
    ServerConfig, CorsConfig, LoggingConfig, StoreBackend,
};
pub use errors::{ErrorResponse, error_codes};
pub use types::{ApiResponse, HealthResponse};
