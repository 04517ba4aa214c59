//! Value objects representing immutable domain concepts.

pub mod product_submission;
pub mod product_view;

// Re-export commonly used types
pub use product_submission::{ImageUpload, ProductSubmission};
pub use product_view::ProductView;
