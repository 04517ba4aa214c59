//! MySQL implementations of the catalog repositories

mod category_repository_impl;
mod product_repository_impl;

pub use category_repository_impl::MySqlCategoryRepository;
pub use product_repository_impl::MySqlProductRepository;
