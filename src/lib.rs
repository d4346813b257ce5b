//! Product API - A small CRUD REST service for products
//!
//! Serves list/get/create/update/delete over a SQLite `product` table, caches
//! the product list, and flushes the cache on minute boundaries.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod mapper;
pub mod models;
pub mod persistence;
pub mod service;
pub mod tasks;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{ProductError, Result};
pub use models::Product;
pub use persistence::{Database, InMemoryProductRepository, ProductRepository, SqliteProductRepository};
pub use service::ProductService;
pub use tasks::spawn_cache_clear_task;
