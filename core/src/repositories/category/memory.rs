//! In-memory implementation of CategoryRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Category, CategoryId};
use crate::errors::DomainError;

use super::trait_::CategoryRepository;

/// Category store kept in process memory, keyed by id
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding one category per name, ids starting at 1
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories = names
            .into_iter()
            .zip(1..)
            .map(|(name, id)| (id, Category::new(id, name)))
            .collect();
        Self {
            categories: Arc::new(RwLock::new(categories)),
        }
    }

    /// Add or replace a category
    pub async fn insert(&self, category: Category) {
        self.categories.write().await.insert(category.id, category);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, DomainError> {
        let categories = self.categories.read().await;
        Ok(categories.values().find(|c| c.has_name(name)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_names_assigns_sequential_ids() {
        let repo = InMemoryCategoryRepository::with_names(["Books", "Games"]);

        let games = repo.find_by_name("Games").await.unwrap().unwrap();
        assert_eq!(games.id, 2);
        assert!(repo.find_by_name("games").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert() {
        let repo = InMemoryCategoryRepository::new();
        assert!(repo.find_by_name("Toys").await.unwrap().is_none());

        repo.insert(Category::new(9, "Toys")).await;
        assert_eq!(repo.find_by_name("Toys").await.unwrap().map(|c| c.id), Some(9));
    }
}
