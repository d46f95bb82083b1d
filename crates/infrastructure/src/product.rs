//! Product repository.

use async_trait::async_trait;
use common::ProductId;
use domain::repository::Result;
use domain::{
    DomainError, Entity, Money, Product, ProductRepository, Repository, RepositoryError,
};
use sqlx::SqlitePool;

/// Row of the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    /// Price in cents.
    pub price: i64,
}

impl ProductRecord {
    pub fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price().cents(),
        }
    }

    pub fn into_entity(self) -> std::result::Result<Product, DomainError> {
        Ok(Product::new(self.id, self.name, Money::from_cents(self.price))?)
    }
}

/// SQLite-backed product repository.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    #[tracing::instrument(skip_all, fields(product_id = %entity.id()))]
    async fn create(&self, entity: &Product) -> Result<()> {
        let record = ProductRecord::from_entity(entity);
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(&record.id)
            .bind(&record.name)
            .bind(record.price)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        metrics::counter!("repository_writes", "entity" => "product", "operation" => "create")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(product_id = %entity.id()))]
    async fn update(&self, entity: &Product) -> Result<()> {
        let record = ProductRecord::from_entity(entity);
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&record.name)
            .bind(record.price)
            .bind(&record.id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(Product::entity_name()));
        }
        metrics::counter!("repository_writes", "entity" => "product", "operation" => "update")
            .increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: &ProductId) -> Result<Product> {
        let record = sqlx::query_as::<_, ProductRecord>(
            "SELECT id, name, price FROM products WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::storage)?
        .ok_or(RepositoryError::NotFound(Product::entity_name()))?;

        Ok(record.into_entity()?)
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Product>> {
        let records = sqlx::query_as::<_, ProductRecord>(
            "SELECT id, name, price FROM products ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::storage)?;

        records
            .into_iter()
            .map(|r| r.into_entity().map_err(RepositoryError::from))
            .collect()
    }
}

impl ProductRepository for SqliteProductRepository {}
