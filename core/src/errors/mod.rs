//! Domain-specific error types and error handling.

mod types;


// Re-export all error types and utilities
pub use types::TokenError;

use pc_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

use crate::domain::entities::ProductId;

/// Core domain errors
///
/// Bad submissions surface as `Validation` or `NotFound`, a failed image
/// write as `Storage`. Token checks raise `Token`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Category lookup by name failed
    pub fn category_not_found(name: &str) -> Self {
        DomainError::NotFound {
            resource: format!("Category with name '{}'", name),
        }
    }

    /// Product lookup by id failed
    pub fn product_not_found(id: ProductId) -> Self {
        DomainError::NotFound {
            resource: format!("Product with ID {}", id),
        }
    }

    /// Error code for programmatic handling by API clients
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Storage { .. } => error_codes::STORAGE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
        }
    }

    /// Whether the error is a missing category or product
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

/// Convert DomainError to ErrorResponse
impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
