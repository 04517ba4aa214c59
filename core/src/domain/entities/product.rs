//! Product entity representing a catalog item.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// Store-assigned product identifier
pub type ProductId = i64;

/// Product entity
///
/// `id` stays `None` until the product store assigns one on the first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the store
    pub id: Option<ProductId>,

    /// Display name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Unit price, never negative
    pub price: Decimal,

    /// Units in stock
    pub stock: u32,

    /// Owning category
    pub category: Category,

    /// Public path of the product image, if one was uploaded
    pub image: Option<String>,
}

impl Product {
    /// Creates a new, not yet persisted product without an image
    pub fn new(
        name: String,
        description: String,
        price: Decimal,
        stock: u32,
        category: Category,
    ) -> Self {
        Self {
            id: None,
            name,
            description,
            price,
            stock,
            category,
            image: None,
        }
    }

    /// Replaces every mutable field except the image
    pub fn replace_details(
        &mut self,
        name: String,
        description: String,
        price: Decimal,
        stock: u32,
        category: Category,
    ) {
        self.name = name;
        self.description = description;
        self.price = price;
        self.stock = stock;
        self.category = category;
    }

    /// Points the product at a newly stored image
    pub fn set_image(&mut self, image: String) {
        self.image = Some(image);
    }

    /// Whether the store has assigned an identifier
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
