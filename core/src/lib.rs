//! # Product Catalog Core
//!
//! Core business logic and domain layer for the product catalog service.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.
//!
//! The two services are independent of each other:
//! - [`services::token::TokenClaimsService`] verifies signed tokens and exposes their claims
//! - [`services::product::ProductService`] runs the product create/update/read/delete workflow

pub mod domain;
pub mod services;
pub mod repositories;
pub mod errors;

// Re-export commonly used types for convenience
pub use domain::{
    Category, CategoryId, Claims, ImageUpload, Product, ProductId, ProductSubmission, ProductView,
};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{
    CategoryRepository, InMemoryCategoryRepository, InMemoryProductRepository, ProductRepository,
};
pub use services::{
    ImageStorageConfig, ImageWriter, ProductService, TokenClaimsService, TokenServiceConfig,
};
