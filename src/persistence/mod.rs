//! Persistence Module
//!
//! The product table, the repository contract over it, and its adapters.
//!
//! | Adapter | Backing store |
//! |---|---|
//! | [`SqliteProductRepository`] | `product` table through a `sqlx::SqlitePool` |
//! | [`InMemoryProductRepository`] | `BTreeMap` behind a tokio `RwLock` |

mod database;
mod entity;
mod memory;
mod repository;
mod sqlite;

pub use database::{Database, SAMPLE_PRODUCTS};
pub use entity::ProductEntity;
pub use memory::InMemoryProductRepository;
pub use repository::ProductRepository;
pub use sqlite::SqliteProductRepository;
