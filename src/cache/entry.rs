//! Cache Entry Module
//!
//! A cached result together with the time it was computed.

use crate::models::Product;

/// Values held by the cache.
pub type CachedValue = Vec<Product>;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached result
    pub value: CachedValue,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: CachedValue) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Milliseconds since the entry was created.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    chrono::Utc::now().timestamp_millis().max(0) as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec![Product::new(1, "T-shirt", "Black T-shirt")]);

        assert_eq!(entry.value.len(), 1);
        assert!(entry.created_at > 0);
    }

    #[test]
    fn test_entry_age_grows() {
        let entry = CacheEntry::new(Vec::new());

        sleep(Duration::from_millis(20));

        assert!(entry.age_ms() >= 20);
    }

    #[test]
    fn test_age_never_negative() {
        let entry = CacheEntry {
            value: Vec::new(),
            created_at: u64::MAX,
        };

        assert_eq!(entry.age_ms(), 0);
    }
}
