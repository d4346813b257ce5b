//! API Module
//!
//! HTTP handlers and routing for the product REST API.
//!
//! # Endpoints
//! - `GET /api/product` - List all products
//! - `GET /api/product/:id` - Fetch a product by id
//! - `POST /api/product` - Create a product
//! - `PUT /api/product` - Update a product
//! - `DELETE /api/product/:id` - Delete a product
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_router, PRODUCT_PATH};
