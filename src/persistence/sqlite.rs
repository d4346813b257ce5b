//! SQLite Product Repository
//!
//! [`ProductRepository`] adapter over the `product` table.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{ProductEntity, ProductRepository};
use crate::error::Result;

/// Repository backed by a shared `SqlitePool`.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductEntity>> {
        let rows = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description FROM product ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductEntity>> {
        let row = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description FROM product WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    async fn save(&self, entity: ProductEntity) -> Result<ProductEntity> {
        let saved = sqlx::query_as::<_, ProductEntity>(
            r"
            INSERT INTO product (id, name, description)
            VALUES (?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description
            RETURNING id, name, description
            ",
        )
        .bind(entity.id)
        .bind(&entity.name)
        .bind(&entity.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM product WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
