//! MySQL implementation of the ProductRepository trait.
//!
//! Products are read joined with their category so the entity always carries
//! the full category record.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};

use pc_core::domain::entities::{Category, Product, ProductId};
use pc_core::errors::DomainError;
use pc_core::repositories::ProductRepository;

const SELECT_PRODUCTS: &str = r#"
    SELECT p.id, p.name, p.description, p.price, p.stock, p.image,
           c.id AS category_id, c.name AS category_name, c.description AS category_description
    FROM products p
    INNER JOIN categories c ON c.id = p.category_id
"#;

/// MySQL implementation of ProductRepository
pub struct MySqlProductRepository {
    /// Database connection pool
    pool: MySqlPool,
}

fn internal(context: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("{}: {}", context, e),
    }
}

impl MySqlProductRepository {
    /// Create a new MySQL product repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a joined database row into a Product entity
    fn row_to_product(row: &sqlx::mysql::MySqlRow) -> Result<Product, DomainError> {
        let category = Category {
            id: row
                .try_get("category_id")
                .map_err(|e| internal("Failed to get category_id", e))?,
            name: row
                .try_get("category_name")
                .map_err(|e| internal("Failed to get category_name", e))?,
            description: row
                .try_get("category_description")
                .map_err(|e| internal("Failed to get category_description", e))?,
        };

        Ok(Product {
            id: Some(row.try_get("id").map_err(|e| internal("Failed to get id", e))?),
            name: row.try_get("name").map_err(|e| internal("Failed to get name", e))?,
            description: row
                .try_get("description")
                .map_err(|e| internal("Failed to get description", e))?,
            price: row
                .try_get::<Decimal, _>("price")
                .map_err(|e| internal("Failed to get price", e))?,
            stock: row.try_get("stock").map_err(|e| internal("Failed to get stock", e))?,
            category,
            image: row.try_get("image").map_err(|e| internal("Failed to get image", e))?,
        })
    }

    async fn insert(&self, mut product: Product) -> Result<Product, DomainError> {
        let query = r#"
            INSERT INTO products (name, description, price, stock, category_id, image)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(product.category.id)
            .bind(&product.image)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to insert product", e))?;

        let id = ProductId::try_from(result.last_insert_id()).map_err(|e| DomainError::Internal {
            message: format!("Product id out of range: {}", e),
        })?;
        product.id = Some(id);
        Ok(product)
    }

    async fn update(&self, id: ProductId, product: Product) -> Result<Product, DomainError> {
        let query = r#"
            UPDATE products
            SET name = ?, description = ?, price = ?, stock = ?, category_id = ?, image = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(product.category.id)
            .bind(&product.image)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to update product", e))?;

        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, DomainError> {
        let query = format!("{} WHERE p.id = ? LIMIT 1", SELECT_PRODUCTS);

        let result = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| internal("Failed to find product", e))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_product(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, product: Product) -> Result<Product, DomainError> {
        match product.id {
            Some(id) => self.update(id, product).await,
            None => self.insert(product).await,
        }
    }

    async fn exists_by_id(&self, id: ProductId) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM products WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| internal("Failed to check product existence", e))?;

        let found: i64 = row
            .try_get("found")
            .map_err(|e| internal("Failed to get existence result", e))?;
        Ok(found == 1)
    }

    async fn delete_by_id(&self, id: ProductId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| internal("Failed to delete product", e))?;

        tracing::debug!(product_id = id, "Product row deleted");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let query = format!("{} ORDER BY p.id", SELECT_PRODUCTS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| internal("Failed to list products", e))?;

        rows.iter().map(Self::row_to_product).collect()
    }
}
