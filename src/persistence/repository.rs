//! Repository contract for product rows.

use async_trait::async_trait;

use super::ProductEntity;
use crate::error::Result;

/// Single-row data access over the product table.
///
/// Every call is one atomic statement against the store; nothing here spans
/// more than one row.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All rows, ordered by id.
    async fn find_all(&self) -> Result<Vec<ProductEntity>>;

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductEntity>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;

    /// Inserts the row, or replaces name and description if the id exists.
    async fn save(&self, entity: ProductEntity) -> Result<ProductEntity>;

    /// Removes the row if present. Deleting a missing id is not an error here.
    async fn delete_by_id(&self, id: i64) -> Result<()>;
}
