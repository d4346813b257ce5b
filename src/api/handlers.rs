//! API Handlers
//!
//! HTTP request handlers for the product endpoints. Each handler logs the
//! operation, delegates to [`ProductService`] and lets [`ProductError`]
//! pick the status code on failure.
//!
//! [`ProductError`]: crate::error::ProductError

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::cache::{shared_cache, SharedCache};
use crate::config::Config;
use crate::error::Result;
use crate::models::{CacheStatsResponse, HealthResponse, Product};
use crate::persistence::{Database, ProductRepository, SqliteProductRepository};
use crate::service::ProductService;

/// Application state shared across all handlers.
///
/// The cache is created here, at the composition root, and handed to both
/// the service and the scheduled clear task.
#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
    pub cache: SharedCache,
}

impl AppState {
    /// Creates a new AppState over `repository` with a fresh cache.
    pub fn new(repository: Arc<dyn ProductRepository>, invalidate_on_write: bool) -> Self {
        let cache = shared_cache();
        let service = ProductService::new(repository, cache.clone(), invalidate_on_write);
        Self { service, cache }
    }

    /// Creates a new AppState backed by the SQLite product table.
    pub fn from_config(config: &Config, database: &Database) -> Self {
        let repository = Arc::new(SqliteProductRepository::new(database.pool().clone()));
        Self::new(repository, config.invalidate_on_write)
    }
}

/// Handler for GET /api/product
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    info!("Find all products");
    let products = state.service.find_all().await?;
    Ok(Json(products))
}

/// Handler for GET /api/product/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>> {
    info!("Find product by id: {}", id);
    let product = state.service.find_by_id(id).await?;
    Ok(Json(product))
}

/// Handler for POST /api/product
///
/// Responds 201 with the stored product.
pub async fn create_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<(StatusCode, Json<Product>)> {
    info!("Creating product with id: {}", product.id);
    let created = state.service.create(product).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /api/product
pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Product>> {
    info!("Updating product with id: {}", product.id);
    let updated = state.service.update(product).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /api/product/:id
///
/// Responds 200 with an empty body.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    info!("Deleting product with id: {}", id);
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let cache = state.cache.read().await;
    Json(CacheStatsResponse::new(&cache.stats(), cache.region_names()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::persistence::InMemoryProductRepository;

    fn test_state() -> AppState {
        AppState::new(Arc::new(InMemoryProductRepository::new()), true)
    }

    fn black_tshirt() -> Product {
        Product::new(1, "T-shirt", "Black T-shirt")
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let (status, created) = create_product(State(state.clone()), Json(black_tshirt()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.0, black_tshirt());

        let found = get_product(State(state), Path(1)).await.unwrap();
        assert_eq!(found.0, black_tshirt());
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let state = test_state();

        let result = get_product(State(state), Path(999)).await;
        assert!(matches!(result, Err(ProductError::NotFound(999))));
    }

    #[tokio::test]
    async fn test_create_conflict() {
        let state = test_state();
        create_product(State(state.clone()), Json(black_tshirt()))
            .await
            .unwrap();

        let result = create_product(State(state), Json(black_tshirt())).await;
        assert!(matches!(result, Err(ProductError::Conflict(1))));
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = test_state();
        create_product(State(state.clone()), Json(black_tshirt()))
            .await
            .unwrap();

        let updated = update_product(
            State(state),
            Json(Product::new(1, "T-shirt", "Yellow T-shirt")),
        )
        .await
        .unwrap();
        assert_eq!(updated.description, "Yellow T-shirt");
    }

    #[tokio::test]
    async fn test_delete_handler() {
        let state = test_state();
        create_product(State(state.clone()), Json(black_tshirt()))
            .await
            .unwrap();

        let status = delete_product(State(state.clone()), Path(1)).await.unwrap();
        assert_eq!(status, StatusCode::OK);

        let result = get_product(State(state), Path(1)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_list_products_empty() {
        let state = test_state();

        let products = list_products(State(state)).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_cache_stats_handler() {
        let state = test_state();
        list_products(State(state.clone())).await.unwrap();
        list_products(State(state.clone())).await.unwrap();

        let response = cache_stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.regions, vec!["products".to_string()]);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
