//! Main product service implementation

use std::sync::Arc;

use crate::domain::entities::{Category, Product, ProductId};
use crate::domain::value_objects::{ImageUpload, ProductSubmission, ProductView};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CategoryRepository, ProductRepository};

use super::config::ImageStorageConfig;
use super::naming::image_file_name;
use super::traits::ImageWriter;

/// Product catalog service
///
/// The image file is written before the product is saved. A save failure
/// after a successful write leaves the file behind.
pub struct ProductService<P, C, W>
where
    P: ProductRepository,
    C: CategoryRepository,
    W: ImageWriter,
{
    /// Product persistence
    product_repository: Arc<P>,
    /// Category lookup
    category_repository: Arc<C>,
    /// Image file sink
    image_writer: Arc<W>,
    /// Image location settings
    storage: ImageStorageConfig,
}

impl<P, C, W> ProductService<P, C, W>
where
    P: ProductRepository,
    C: CategoryRepository,
    W: ImageWriter,
{
    /// Create a new product service
    ///
    /// # Arguments
    ///
    /// * `product_repository` - Product store
    /// * `category_repository` - Category store
    /// * `image_writer` - Writer used for uploaded images
    /// * `storage` - Image directory and public prefix
    pub fn new(
        product_repository: Arc<P>,
        category_repository: Arc<C>,
        image_writer: Arc<W>,
        storage: ImageStorageConfig,
    ) -> Self {
        Self {
            product_repository,
            category_repository,
            image_writer,
            storage,
        }
    }

    /// Create a product from a submission
    ///
    /// # Returns
    ///
    /// * `Ok(ProductView)` - The stored product
    /// * `Err(DomainError::NotFound)` - Unknown category; nothing was written
    /// * `Err(DomainError::Storage)` - Image could not be written
    pub async fn create_product(&self, submission: ProductSubmission) -> DomainResult<ProductView> {
        submission.validate()?;
        let category = self.resolve_category(&submission.category_name).await?;
        let image = self.store_image(submission.image_to_store()).await?;

        let mut product = Product::new(
            submission.name,
            submission.description,
            submission.price,
            submission.stock,
            category,
        );
        if let Some(image) = image {
            product.set_image(image);
        }

        let saved = self.product_repository.save(product).await?;
        tracing::info!(
            product_id = ?saved.id,
            category = %saved.category.name,
            "Product created"
        );
        ProductView::try_from(&saved)
    }

    /// Fully replace an existing product
    ///
    /// The image reference only changes when the submission carries a new,
    /// non-empty image.
    pub async fn update_product(
        &self,
        id: ProductId,
        submission: ProductSubmission,
    ) -> DomainResult<ProductView> {
        let mut product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(id))?;
        submission.validate()?;

        let category = self.resolve_category(&submission.category_name).await?;
        let image = self.store_image(submission.image_to_store()).await?;

        product.replace_details(
            submission.name,
            submission.description,
            submission.price,
            submission.stock,
            category,
        );
        if let Some(image) = image {
            product.set_image(image);
        }

        let saved = self.product_repository.save(product).await?;
        tracing::info!(product_id = id, "Product updated");
        ProductView::try_from(&saved)
    }

    /// Fetch one product
    pub async fn get_product(&self, id: ProductId) -> DomainResult<ProductView> {
        let product = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(id))?;
        ProductView::try_from(&product)
    }

    /// All products in store order
    pub async fn list_products(&self) -> DomainResult<Vec<ProductView>> {
        self.product_repository
            .find_all()
            .await?
            .iter()
            .map(ProductView::try_from)
            .collect()
    }

    /// Delete a product; an unknown id leaves the store untouched
    pub async fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        if !self.product_repository.exists_by_id(id).await? {
            return Err(DomainError::product_not_found(id));
        }
        self.product_repository.delete_by_id(id).await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn resolve_category(&self, name: &str) -> DomainResult<Category> {
        self.category_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| {
                tracing::warn!(category = %name, "Unknown category");
                DomainError::category_not_found(name)
            })
    }

    /// Writes the upload, returning its public reference
    async fn store_image(&self, upload: Option<&ImageUpload>) -> DomainResult<Option<String>> {
        let Some(upload) = upload else {
            return Ok(None);
        };

        let file_name = image_file_name(&upload.original_filename);
        let path = self.storage.path_for(&file_name);

        self.image_writer
            .write(&path, &upload.bytes)
            .await
            .map_err(|source| {
                tracing::error!(file_name = %file_name, error = %source, "Image write failed");
                DomainError::Storage {
                    message: format!("failed to store image '{}'", file_name),
                    source,
                }
            })?;

        tracing::debug!(file_name = %file_name, size = upload.bytes.len(), "Image stored");
        Ok(Some(self.storage.public_reference(&file_name)))
    }
}
