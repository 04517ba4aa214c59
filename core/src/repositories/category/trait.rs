//! Category repository trait.
//!
//! Categories are managed by another part of the platform; this service
//! only needs to resolve them by name when a product is written.

use async_trait::async_trait;

use crate::domain::entities::Category;
use crate::errors::DomainError;

/// Read-only access to categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Find a category by its exact (case-sensitive) name
    ///
    /// # Returns
    /// * `Ok(Some(Category))` - Category found
    /// * `Ok(None)` - No category with that name
    /// * `Err(DomainError)` - Store failure
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError>;
}
