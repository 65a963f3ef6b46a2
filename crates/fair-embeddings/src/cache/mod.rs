//! 2-tier embedding cache coordinator.
//!
//! L1 (moka in-memory) → L2 (SQLite persistent).
//! On miss the vector is computed once per key, written to L2, then
//! returned and kept in L1.

pub mod key;
pub mod l1_memory;
pub mod l2_sqlite;
pub mod model_version;

pub use key::cache_key;
pub use l1_memory::L1MemoryCache;
pub use l2_sqlite::L2SqliteCache;
pub use model_version::{detect_model_change, DetectionResult};

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use fair_core::errors::EmbeddingError;
use serde::Serialize;
use tracing::{debug, warn};

/// Which tier answered a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheHitTier {
    L1,
    L2,
    Miss,
}

/// Live hit/miss counters.
#[derive(Debug, Default)]
pub struct CacheStats {
    l1_hits: AtomicU64,
    l2_hits: AtomicU64,
    misses: AtomicU64,
    computations: AtomicU64,
}

/// Point-in-time copy of [`CacheStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStatsSnapshot {
    pub l1_hits: u64,
    pub l2_hits: u64,
    pub misses: u64,
    pub computations: u64,
}

impl CacheStats {
    pub fn snapshot(&self) -> CacheStatsSnapshot {
        CacheStatsSnapshot {
            l1_hits: self.l1_hits.load(Ordering::Relaxed),
            l2_hits: self.l2_hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            computations: self.computations.load(Ordering::Relaxed),
        }
    }

    fn record(&self, tier: CacheHitTier) {
        let counter = match tier {
            CacheHitTier::L1 => &self.l1_hits,
            CacheHitTier::L2 => &self.l2_hits,
            CacheHitTier::Miss => &self.misses,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// A freshly computed vector and whether it may be cached.
///
/// Vectors produced by a fallback provider are returned but not cached, so
/// they never sit under the primary model's version.
#[derive(Debug, Clone)]
pub struct Computed {
    pub vector: Vec<f32>,
    pub cacheable: bool,
}

/// Init outcome that moka must not store.
enum LoadError {
    Failed(EmbeddingError),
    Uncached(Arc<Vec<f32>>),
}

/// Orchestrates lookups across both cache tiers.
pub struct CacheCoordinator {
    l1: L1MemoryCache,
    l2: Option<L2SqliteCache>,
    stats: CacheStats,
}

impl CacheCoordinator {
    /// Coordinator whose L2 lives in memory.
    pub fn in_memory(l1_capacity: u64, model_version: &str) -> Self {
        Self::open(l1_capacity, None, model_version)
    }

    /// Coordinator with a file-backed L2 at `path`.
    ///
    /// An unreadable or corrupt file falls back to an in-memory L2, so the
    /// generation is recomputed in full instead of failing.
    pub fn open(l1_capacity: u64, path: Option<&Path>, model_version: &str) -> Self {
        let l2 = match path {
            Some(p) => match L2SqliteCache::open(p, model_version) {
                Ok(cache) => Some(cache),
                Err(e) => {
                    warn!(error = %e, "persistent embedding cache unusable, recomputing in memory");
                    Self::memory_l2(model_version)
                }
            },
            None => Self::memory_l2(model_version),
        };
        Self {
            l1: L1MemoryCache::new(l1_capacity),
            l2,
            stats: CacheStats::default(),
        }
    }

    fn memory_l2(model_version: &str) -> Option<L2SqliteCache> {
        match L2SqliteCache::open_in_memory(model_version) {
            Ok(cache) => Some(cache),
            Err(e) => {
                warn!(error = %e, "in-memory L2 unavailable, running with L1 only");
                None
            }
        }
    }

    /// Look up without computing. Does not touch the counters.
    pub fn get(&self, key: &str) -> (Option<Arc<Vec<f32>>>, CacheHitTier) {
        if let Some(v) = self.l1.get(key) {
            return (Some(v), CacheHitTier::L1);
        }
        if let Some(v) = self.read_l2(key) {
            let v = Arc::new(v);
            self.l1.insert(key.to_string(), v.clone());
            return (Some(v), CacheHitTier::L2);
        }
        (None, CacheHitTier::Miss)
    }

    /// Return the cached vector for `key`, computing it at most once.
    ///
    /// Concurrent callers for the same key wait for the single computation.
    pub fn get_or_compute<F>(
        &self,
        key: &str,
        compute: F,
    ) -> Result<(Arc<Vec<f32>>, CacheHitTier), EmbeddingError>
    where
        F: FnOnce() -> Result<Computed, EmbeddingError>,
    {
        self.lookup(key, compute, true)
    }

    /// Like [`get_or_compute`](Self::get_or_compute), but a fresh vector is
    /// kept in L1 only. Used for query text and fetched articles, which must
    /// not accumulate in the persistent tier.
    pub fn get_or_compute_transient<F>(
        &self,
        key: &str,
        compute: F,
    ) -> Result<(Arc<Vec<f32>>, CacheHitTier), EmbeddingError>
    where
        F: FnOnce() -> Result<Computed, EmbeddingError>,
    {
        self.lookup(key, compute, false)
    }

    fn lookup<F>(
        &self,
        key: &str,
        compute: F,
        persist: bool,
    ) -> Result<(Arc<Vec<f32>>, CacheHitTier), EmbeddingError>
    where
        F: FnOnce() -> Result<Computed, EmbeddingError>,
    {
        let mut tier = CacheHitTier::L1;
        let result = self.l1.inner().try_get_with(key.to_string(), || {
            if let Some(v) = self.read_l2(key) {
                tier = CacheHitTier::L2;
                return Ok(Arc::new(v));
            }
            tier = CacheHitTier::Miss;
            self.stats.computations.fetch_add(1, Ordering::Relaxed);
            match compute() {
                Ok(Computed {
                    vector,
                    cacheable: true,
                }) => {
                    if persist {
                        self.write_l2(key, &vector);
                    }
                    Ok(Arc::new(vector))
                }
                Ok(Computed {
                    vector,
                    cacheable: false,
                }) => Err(LoadError::Uncached(Arc::new(vector))),
                Err(e) => Err(LoadError::Failed(e)),
            }
        });

        match result {
            Ok(v) => {
                self.stats.record(tier);
                debug!(key, tier = ?tier, "embedding lookup");
                Ok((v, tier))
            }
            Err(err) => {
                self.stats.record(CacheHitTier::Miss);
                match err.as_ref() {
                    LoadError::Uncached(v) => Ok((v.clone(), CacheHitTier::Miss)),
                    LoadError::Failed(e) => Err(e.clone()),
                }
            }
        }
    }

    fn read_l2(&self, key: &str) -> Option<Vec<f32>> {
        let l2 = self.l2.as_ref()?;
        match l2.get(key) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "L2 read failed, treating as miss");
                None
            }
        }
    }

    fn write_l2(&self, key: &str, vector: &[f32]) {
        if let Some(l2) = &self.l2 {
            if let Err(e) = l2.insert(key, vector) {
                warn!(error = %e, "L2 write failed");
            }
        }
    }

    pub fn stats(&self) -> CacheStatsSnapshot {
        self.stats.snapshot()
    }

    pub fn l1(&self) -> &L1MemoryCache {
        &self.l1
    }

    pub fn l2(&self) -> Option<&L2SqliteCache> {
        self.l2.as_ref()
    }

    /// Drop every cached vector in both tiers.
    pub fn clear(&self) {
        self.l1.clear();
        if let Some(l2) = &self.l2 {
            if let Err(e) = l2.clear() {
                warn!(error = %e, "L2 clear failed");
            }
        }
    }
}
