//! Request and Response models for the product API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod product;
pub mod responses;

// Re-export commonly used types
pub use product::Product;
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse};
