pub mod category;
pub mod product;

pub use category::{CategoryRepository, InMemoryCategoryRepository};
pub use product::{InMemoryProductRepository, ProductRepository};
