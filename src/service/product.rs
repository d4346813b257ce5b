//! Product Service
//!
//! Business rules over the product repository: existence checks before
//! reads, updates and deletes, conflict checks before creation, and caching
//! of the full product list.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{SharedCache, ALL_PRODUCTS_KEY, PRODUCTS_REGION};
use crate::error::{ProductError, Result};
use crate::mapper::{entity_to_model, model_to_entity};
use crate::models::Product;
use crate::persistence::ProductRepository;

// == Product Service ==
/// Product use cases, shared by every request handler.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
    cache: SharedCache,
    /// Evict the cached list after each successful write
    invalidate_on_write: bool,
}

impl ProductService {
    // == Constructor ==
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        cache: SharedCache,
        invalidate_on_write: bool,
    ) -> Self {
        Self {
            repository,
            cache,
            invalidate_on_write,
        }
    }

    pub fn cache(&self) -> &SharedCache {
        &self.cache
    }

    // == Find All ==
    /// Returns every product, possibly from the cache.
    ///
    /// An empty store yields an empty list. With write invalidation disabled
    /// the result can lag behind the store until the next scheduled clear.
    pub async fn find_all(&self) -> Result<Vec<Product>> {
        let cached = self.cache.write().await.get(PRODUCTS_REGION, ALL_PRODUCTS_KEY);
        if let Some(cached) = cached {
            debug!("Serving {} products from cache", cached.len());
            return Ok(cached);
        }

        let entities = self.repository.find_all().await?;
        info!("Find {} products", entities.len());

        let products: Vec<Product> = entities.into_iter().map(entity_to_model).collect();

        self.cache
            .write()
            .await
            .put(PRODUCTS_REGION, ALL_PRODUCTS_KEY, products.clone());

        Ok(products)
    }

    // == Find By Id ==
    pub async fn find_by_id(&self, id: i64) -> Result<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .map(entity_to_model)
            .ok_or(ProductError::NotFound(id))
    }

    // == Create ==
    /// Persists a new product. Fails with `Conflict` if the id is taken.
    pub async fn create(&self, product: Product) -> Result<Product> {
        if self.repository.exists_by_id(product.id).await? {
            return Err(ProductError::Conflict(product.id));
        }

        let saved = self.repository.save(model_to_entity(product)).await?;
        self.after_write().await;

        Ok(entity_to_model(saved))
    }

    // == Update ==
    /// Overwrites name and description of an existing product.
    pub async fn update(&self, product: Product) -> Result<Product> {
        let mut entity = self
            .repository
            .find_by_id(product.id)
            .await?
            .ok_or(ProductError::NotFound(product.id))?;

        entity.name = product.name;
        entity.description = product.description;

        let saved = self.repository.save(entity).await?;
        self.after_write().await;

        Ok(entity_to_model(saved))
    }

    // == Delete By Id ==
    pub async fn delete_by_id(&self, id: i64) -> Result<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        self.after_write().await;

        Ok(())
    }

    async fn after_write(&self) {
        if self.invalidate_on_write {
            let removed = self.cache.write().await.evict_region(PRODUCTS_REGION);
            if removed > 0 {
                debug!("Evicted {} cached product lists", removed);
            }
        }
    }
}
