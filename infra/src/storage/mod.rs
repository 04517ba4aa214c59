//! Storage module - product image files

mod local;


pub use local::LocalImageWriter;
