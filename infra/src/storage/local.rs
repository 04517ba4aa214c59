//! Image writer backed by the local file system

use std::path::Path;

use async_trait::async_trait;
use pc_core::services::product::ImageWriter;

/// Writes image files with `tokio::fs`, creating missing directories
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalImageWriter;

impl LocalImageWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageWriter for LocalImageWriter {
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, bytes).await?;

        tracing::debug!(path = %path.display(), size = bytes.len(), "Image file written");
        Ok(())
    }
}
