//! Product catalog route handlers
//!
//! Reads are public. Writes go through `JwtAuth` and require the
//! `ADMIN` role.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_product;
pub use delete::delete_product;
pub use get::get_product;
pub use list::list_products;
pub use update::update_product;
