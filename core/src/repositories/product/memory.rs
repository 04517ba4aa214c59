//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Product, ProductId};
use crate::errors::DomainError;

use super::trait_::ProductRepository;

/// Product store kept in process memory
///
/// Identifiers are assigned from a counter starting at 1 and never reused.
/// `find_all` returns products ordered by id.
#[derive(Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored products
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn save(&self, mut product: Product) -> Result<Product, DomainError> {
        let id = match product.id {
            Some(id) => id,
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        product.id = Some(id);

        let mut products = self.products.write().await;
        products.insert(id, product.clone());
        Ok(product)
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, DomainError> {
        let products = self.products.read().await;
        Ok(products.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        let mut products = self.products.write().await;
        products.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }
}
