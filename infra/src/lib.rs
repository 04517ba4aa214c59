//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the product catalog
//! service. It provides concrete implementations of the repository and
//! storage traits declared in `pc_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool and repositories using SQLx
//! - **Storage**: Local file-system writer for product images

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Storage module - Local image files
pub mod storage;

pub use storage::LocalImageWriter;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
