//! L1 in-memory cache using moka.
//!
//! TinyLFU admission policy, bounded by entry count.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

/// L1 in-memory embedding cache.
///
/// Keys are blake3 cache keys. Values are shared embedding vectors.
pub struct L1MemoryCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl L1MemoryCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Arc<Vec<f32>>) {
        self.cache.insert(key, embedding);
    }

    /// Underlying moka cache, for compute-once lookups.
    pub(crate) fn inner(&self) -> &Cache<String, Arc<Vec<f32>>> {
        &self.cache
    }

    /// Approximate entry count.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
