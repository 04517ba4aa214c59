//! Domain entities representing core business objects.

pub mod category;
pub mod product;
pub mod token;

// Re-export commonly used types
pub use category::{Category, CategoryId};
pub use product::{Product, ProductId};
pub use token::{Claims, ROLE_CLAIM, SUBJECT_CLAIM};
