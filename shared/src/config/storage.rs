//! Product image storage configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where uploaded product images are written and how they are referenced
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory on disk receiving uploaded images
    pub image_dir: PathBuf,

    /// Public path prefix stored on the product (e.g. "/images")
    pub public_prefix: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("static/images"),
            public_prefix: String::from("/images"),
        }
    }
}

impl StorageConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            image_dir: std::env::var("IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.image_dir),
            public_prefix: std::env::var("IMAGE_PUBLIC_PREFIX")
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.public_prefix),
        }
    }
}
