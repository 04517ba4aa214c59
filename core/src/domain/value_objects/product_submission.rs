//! Create/update payload for a product.

use rust_decimal::Decimal;

use crate::errors::DomainError;

/// Decimal places a stored price keeps
pub const PRICE_SCALE: u32 = 2;

/// Largest price a `DECIMAL(12,2)` column holds
pub fn max_price() -> Decimal {
    Decimal::new(999_999_999_999, PRICE_SCALE)
}

/// Binary image attached to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// File name as sent by the client
    pub original_filename: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(original_filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            original_filename: original_filename.into(),
            bytes,
        }
    }

    /// An upload with no content is treated as no upload at all
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Product fields submitted for create or full replace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSubmission {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock: u32,
    /// Name of an existing category
    pub category_name: String,
    pub image: Option<ImageUpload>,
}

impl ProductSubmission {
    /// Checks the invariants the entity itself cannot express
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(DomainError::Validation {
                message: format!("price must not be negative, got {}", self.price),
            });
        }
        if self.price.normalize().scale() > PRICE_SCALE {
            return Err(DomainError::Validation {
                message: format!(
                    "price must have at most {} decimal places, got {}",
                    PRICE_SCALE, self.price
                ),
            });
        }
        if self.price > max_price() {
            return Err(DomainError::Validation {
                message: format!("price must not exceed {}, got {}", max_price(), self.price),
            });
        }
        Ok(())
    }

    /// The image to store, if one with content was supplied
    pub fn image_to_store(&self) -> Option<&ImageUpload> {
        self.image.as_ref().filter(|image| !image.is_empty())
    }
}
