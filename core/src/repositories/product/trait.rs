//! Product repository trait defining the interface for product persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations own identifier assignment: `save` on a product whose `id`
//! is `None` inserts it and returns it with the new id.

use async_trait::async_trait;

use crate::domain::entities::{Product, ProductId};
use crate::errors::DomainError;

/// Repository trait for Product entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use pc_core::repositories::ProductRepository;
/// use pc_core::domain::entities::{Product, ProductId};
/// use pc_core::errors::DomainError;
///
/// struct NullProductRepository;
///
/// #[async_trait]
/// impl ProductRepository for NullProductRepository {
///     async fn find_by_id(&self, _id: ProductId) -> Result<Option<Product>, DomainError> {
///         Ok(None)
///     }
///     async fn save(&self, mut product: Product) -> Result<Product, DomainError> {
///         product.id.get_or_insert(1);
///         Ok(product)
///     }
///     async fn exists_by_id(&self, _id: ProductId) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///     async fn delete_by_id(&self, _id: ProductId) -> Result<(), DomainError> {
///         Ok(())
///     }
///     async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product with given ID
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError>;

    /// Insert (when `id` is `None`) or fully replace a product
    ///
    /// # Returns
    /// * `Ok(Product)` - The stored product, identifier assigned
    /// * `Err(DomainError)` - Store failure
    async fn save(&self, product: Product) -> Result<Product, DomainError>;

    /// Check whether a product with the given identifier exists
    async fn exists_by_id(&self, id: ProductId) -> Result<bool, DomainError>;

    /// Remove a product; removing an absent id is not an error at this level
    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError>;

    /// All products, in store-defined order
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;
}
