//! Category entity. Categories are owned outside this service and only read.

use serde::{Deserialize, Serialize};

/// Store-assigned category identifier
pub type CategoryId = i64;

/// Product category, referenced by its unique, case-sensitive name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Unique category name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,
}

impl Category {
    /// Creates a category without a description
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    /// Exact, case-sensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }
}
