//! Response DTOs for the product API
//!
//! Bodies for the endpoints that do not return products directly.

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the cache statistics endpoint (GET /api/cache/stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that fell through to the repository
    pub misses: u64,
    /// Number of region evictions caused by writes
    pub evictions: u64,
    /// Number of wholesale clears performed by the scheduler
    pub clears: u64,
    /// Current number of cached entries across all regions
    pub total_entries: usize,
    /// Names of the regions currently allocated
    pub regions: Vec<String>,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl CacheStatsResponse {
    /// Creates a new CacheStatsResponse from cache statistics
    pub fn new(stats: &CacheStats, regions: Vec<String>) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            clears: stats.clears,
            total_entries: stats.total_entries,
            regions,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
