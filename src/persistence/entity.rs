//! Product Entity
//!
//! Row shape of the `product` table.

use sqlx::FromRow;

// == Product Entity ==
/// A persisted product row.
///
/// `name` and `description` map to NOT NULL columns.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl ProductEntity {
    /// Creates a new ProductEntity
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}
