//! Configuration for the product service

use std::path::PathBuf;

use pc_shared::config::StorageConfig;

/// Where product images are written and how they are referenced
#[derive(Debug, Clone)]
pub struct ImageStorageConfig {
    /// Directory the image files are written to
    pub directory: PathBuf,
    /// Prefix of the public reference stored on the product
    pub public_prefix: String,
}

impl Default for ImageStorageConfig {
    fn default() -> Self {
        Self::from(&StorageConfig::default())
    }
}

impl From<&StorageConfig> for ImageStorageConfig {
    fn from(config: &StorageConfig) -> Self {
        Self {
            directory: config.image_dir.clone(),
            public_prefix: config.public_prefix.clone(),
        }
    }
}

impl ImageStorageConfig {
    pub fn new(directory: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            public_prefix: public_prefix.into(),
        }
    }

    /// Reference stored on the product for a written file
    pub fn public_reference(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name)
    }

    /// Full path of a file inside the image directory
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.directory.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_reference_joins_once() {
        let config = ImageStorageConfig::new("static/images", "/images/");
        assert_eq!(config.public_reference("a.png"), "/images/a.png");

        let config = ImageStorageConfig::new("static/images", "/images");
        assert_eq!(config.public_reference("a.png"), "/images/a.png");
    }

    #[test]
    fn test_path_for_stays_in_directory() {
        let config = ImageStorageConfig::new("/var/catalog", "/images");
        assert_eq!(config.path_for("x.png"), PathBuf::from("/var/catalog/x.png"));
    }
}
