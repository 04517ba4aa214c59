//! Product service module for the catalog create/update/read/delete workflow
//!
//! This module provides:
//! - Category resolution by name before any side effect
//! - Image storage under a configured directory with collision-resistant names
//! - Persistence through the product repository
//! - Projection of stored products into views

mod config;
mod naming;
mod service;
mod traits;


pub use config::ImageStorageConfig;
pub use naming::{base_name, image_file_name};
pub use service::ProductService;
pub use traits::ImageWriter;
