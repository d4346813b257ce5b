//! Cache Module
//!
//! Process-local result cache split into named regions. Regions are only ever
//! emptied wholesale, either by the scheduled clear or by write invalidation.

mod entry;
mod manager;
mod region;
mod stats;


use std::sync::Arc;

use tokio::sync::RwLock;

// Re-export public types
pub use entry::{CacheEntry, CachedValue};
pub use manager::CacheManager;
pub use region::CacheRegion;
pub use stats::CacheStats;

/// Cache handle shared between the service and the scheduled clear task.
pub type SharedCache = Arc<RwLock<CacheManager>>;

// == Public Constants ==
/// Region holding the product list
pub const PRODUCTS_REGION: &str = "products";

/// Key of the full product list inside [`PRODUCTS_REGION`]
pub const ALL_PRODUCTS_KEY: &str = "all";

/// Creates an empty cache ready to be shared.
pub fn shared_cache() -> SharedCache {
    Arc::new(RwLock::new(CacheManager::new()))
}
