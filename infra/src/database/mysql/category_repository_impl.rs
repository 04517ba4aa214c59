//! MySQL implementation of the CategoryRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use pc_core::domain::entities::Category;
use pc_core::errors::DomainError;
use pc_core::repositories::CategoryRepository;

/// MySQL implementation of CategoryRepository
///
/// Name matching is exact; the `categories.name` column uses a binary
/// collation so the comparison is case-sensitive.
pub struct MySqlCategoryRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCategoryRepository {
    /// Create a new MySQL category repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_category(row: &sqlx::mysql::MySqlRow) -> Result<Category, DomainError> {
        Ok(Category {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get description: {}", e) })?,
        })
    }
}

#[async_trait]
impl CategoryRepository for MySqlCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let query = r#"
            SELECT id, name, description
            FROM categories
            WHERE name = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find category: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }
}
