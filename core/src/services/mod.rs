//! Business services containing domain logic and use cases.

pub mod product;
pub mod token;

// Re-export commonly used types
pub use product::{ImageStorageConfig, ImageWriter, ProductService};
pub use token::{TokenClaimsService, TokenServiceConfig};
