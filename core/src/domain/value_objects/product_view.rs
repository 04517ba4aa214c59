//! Externally returned projection of a product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CategoryId, Product, ProductId};
use crate::errors::DomainError;

/// Product as returned to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    pub category_id: CategoryId,
    pub category_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Field projection; only persisted products have a view
impl TryFrom<&Product> for ProductView {
    type Error = DomainError;

    fn try_from(product: &Product) -> Result<Self, Self::Error> {
        let id = product.id.ok_or_else(|| DomainError::Internal {
            message: format!("product '{}' has no identifier", product.name),
        })?;

        Ok(Self {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: product.stock,
            category_id: product.category.id,
            category_name: product.category.name.clone(),
            image: product.image.clone(),
        })
    }
}
