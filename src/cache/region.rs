//! Cache Region Module
//!
//! A named bucket of cached results, emptied as a unit.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CachedValue};

// == Cache Region ==
/// Key to entry storage for one region.
#[derive(Debug, Default)]
pub struct CacheRegion {
    entries: HashMap<String, CacheEntry>,
}

impl CacheRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, replacing whatever was there.
    pub fn put(&mut self, key: impl Into<String>, value: CachedValue) {
        self.entries.insert(key.into(), CacheEntry::new(value));
    }

    /// Drops every entry and returns how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
