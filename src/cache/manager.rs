//! Cache Manager Module
//!
//! Owns every cache region and the statistics shared across them.

use std::collections::HashMap;

use crate::cache::{CacheRegion, CacheStats, CachedValue};

// == Cache Manager ==
/// Registry of named cache regions.
#[derive(Debug, Default)]
pub struct CacheManager {
    /// Regions by name, created lazily on first `put`
    regions: HashMap<String, CacheRegion>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheManager {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Looks up `key` in `region`, recording a hit or a miss.
    pub fn get(&mut self, region: &str, key: &str) -> Option<CachedValue> {
        let value = self
            .regions
            .get(region)
            .and_then(|r| r.get(key))
            .map(|entry| entry.value.clone());

        match value {
            Some(_) => self.stats.record_hit(),
            None => self.stats.record_miss(),
        }

        value
    }

    // == Put ==
    /// Stores `value` under `key` in `region`, creating the region if needed.
    pub fn put(&mut self, region: &str, key: impl Into<String>, value: CachedValue) {
        self.regions
            .entry(region.to_string())
            .or_default()
            .put(key, value);
    }

    // == Evict Region ==
    /// Empties a single region. Returns the number of entries dropped.
    pub fn evict_region(&mut self, region: &str) -> usize {
        let removed = self.regions.get_mut(region).map_or(0, CacheRegion::clear);
        if removed > 0 {
            self.stats.record_eviction();
        }
        removed
    }

    // == Clear All ==
    /// Empties every region. Region names stay registered.
    ///
    /// Returns the total number of entries dropped.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.regions.values_mut().map(CacheRegion::clear).sum();
        self.stats.record_clear();
        removed
    }

    // == Region Names ==
    /// Sorted names of all known regions.
    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.regions.keys().cloned().collect();
        names.sort();
        names
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.len());
        stats
    }

    /// Total entries across all regions.
    pub fn len(&self) -> usize {
        self.regions.values().map(CacheRegion::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
