pub mod error;
pub mod product;

pub use error::{ErrorResponse, ErrorResponseExt};
pub use product::{FormError, ProductForm};
