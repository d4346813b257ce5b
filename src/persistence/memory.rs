//! In-memory Product Repository

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProductEntity, ProductRepository};
use crate::error::Result;

/// Repository keeping rows in a `BTreeMap`, so `find_all` comes back id-ordered
/// like the SQL adapter.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    rows: RwLock<BTreeMap<i64, ProductEntity>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `rows`.
    pub fn with_rows(rows: impl IntoIterator<Item = ProductEntity>) -> Self {
        Self {
            rows: RwLock::new(rows.into_iter().map(|row| (row.id, row)).collect()),
        }
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<ProductEntity>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductEntity>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn save(&self, entity: ProductEntity) -> Result<ProductEntity> {
        self.rows.write().await.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> Result<()> {
        self.rows.write().await.remove(&id);
        Ok(())
    }
}
