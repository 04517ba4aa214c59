//! Multipart product form
//!
//! Text fields `name`, `description`, `price`, `stock` and `name_category`
//! plus an optional `image` file part.

use std::str::FromStr;

use actix_multipart::{Field, Multipart, MultipartError};
use futures_util::StreamExt;
use pc_core::domain::value_objects::{ImageUpload, ProductSubmission};
use rust_decimal::Decimal;
use validator::{Validate, ValidationErrors};

/// Raw form fields as received
#[derive(Debug, Clone, Default, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    #[validate(length(min = 1))]
    pub name_category: String,
    pub image: Option<ImageUpload>,
}

/// Why a submitted form was rejected
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Field '{field}' is not valid UTF-8")]
    Encoding { field: String },

    #[error("Request body exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("Invalid value for '{field}': {value}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Validation failed: {0}")]
    Invalid(#[from] ValidationErrors),
}

impl ProductForm {
    /// Read every part of a multipart body, rejecting bodies over `limit` bytes
    ///
    /// Unknown parts are drained and ignored.
    pub async fn from_multipart(mut payload: Multipart, limit: usize) -> Result<Self, FormError> {
        let mut form = ProductForm::default();
        let mut total = 0usize;

        while let Some(item) = payload.next().await {
            let mut field = item?;
            let name = field.name().map(str::to_owned).unwrap_or_default();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_owned);

            let bytes = read_field(&mut field, limit, &mut total).await?;

            match name.as_str() {
                "image" => {
                    form.image = Some(ImageUpload::new(file_name.unwrap_or_default(), bytes));
                }
                "name" => form.name = into_text(&name, bytes)?,
                "description" => form.description = into_text(&name, bytes)?,
                "price" => form.price = into_text(&name, bytes)?,
                "stock" => form.stock = into_text(&name, bytes)?,
                "name_category" => form.name_category = into_text(&name, bytes)?,
                other => log::debug!("Ignoring multipart field '{}'", other),
            }
        }

        Ok(form)
    }

    /// Validate and convert into the domain submission
    pub fn into_submission(self) -> Result<ProductSubmission, FormError> {
        self.validate()?;

        let price = Decimal::from_str(self.price.trim()).map_err(|_| FormError::InvalidNumber {
            field: "price",
            value: self.price.clone(),
        })?;
        let stock = self.stock.trim().parse::<u32>().map_err(|_| FormError::InvalidNumber {
            field: "stock",
            value: self.stock.clone(),
        })?;

        Ok(ProductSubmission {
            name: self.name,
            description: self.description,
            price,
            stock,
            category_name: self.name_category,
            image: self.image,
        })
    }
}

async fn read_field(field: &mut Field, limit: usize, total: &mut usize) -> Result<Vec<u8>, FormError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk?;
        *total += chunk.len();
        if *total > limit {
            return Err(FormError::TooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

fn into_text(field: &str, bytes: Vec<u8>) -> Result<String, FormError> {
    String::from_utf8(bytes).map_err(|_| FormError::Encoding {
        field: field.to_string(),
    })
}
