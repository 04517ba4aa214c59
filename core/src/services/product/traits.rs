//! Traits for image storage integration

use async_trait::async_trait;
use std::path::Path;

/// Trait for writing uploaded image bytes somewhere durable
#[async_trait]
pub trait ImageWriter: Send + Sync {
    /// Write `bytes` to `path`, creating missing parent directories
    async fn write(&self, path: &Path, bytes: &[u8]) -> std::io::Result<()>;
}
