//! API Routes
//!
//! Configures the Axum router with the product endpoints.

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, create_product, delete_product, get_product, health_handler,
    list_products, update_product, AppState,
};

/// Base path of the product resource
pub const PRODUCT_PATH: &str = "/api/product";

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/product` - List all products
/// - `GET /api/product/:id` - Fetch one product
/// - `POST /api/product` - Create a product (201)
/// - `PUT /api/product` - Update name and description
/// - `DELETE /api/product/:id` - Delete a product
/// - `GET /api/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// The collection routes also answer with a trailing slash.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(PRODUCT_PATH, collection_routes())
        .route(&format!("{PRODUCT_PATH}/"), collection_routes())
        .route(
            &format!("{PRODUCT_PATH}/:id"),
            get(get_product).delete(delete_product),
        )
        .route("/api/cache/stats", get(cache_stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn collection_routes() -> MethodRouter<AppState> {
    get(list_products).post(create_product).put(update_product)
}
