//! Bounded LRU store for computed matrices.
//!
//! Process-local, in-memory, restart-clearable. Eviction is strict LRU
//! by access recency; an optional TTL independently expires entries on
//! lookup. All mutation happens under a single mutex, so concurrent
//! callers never observe a torn entry.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use lru::LruCache;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::debug;

use unmyeong_types::FusionMatrix;

/// Cache configuration. Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries. Must be positive.
    pub max_entries: usize,
    /// Optional absolute lifetime per entry.
    pub ttl: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            ttl: None,
        }
    }
}

/// Cache construction and lifecycle errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    /// `max_entries` was zero.
    #[error("cache capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    /// The process-global cache was initialized twice.
    #[error("matrix cache is already initialized")]
    AlreadyInitialized,
}

/// Snapshot of cache occupancy and traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub size: usize,
    pub max_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub enabled: bool,
}

#[derive(Debug)]
struct Entry {
    matrix: Arc<FusionMatrix>,
    inserted: Instant,
}

/// Bounded LRU + TTL store keyed by the canonical input hash.
#[derive(Debug)]
pub struct MatrixCache {
    inner: Mutex<LruCache<String, Entry>>,
    ttl: Option<Duration>,
    max_entries: usize,
    enabled: AtomicBool,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MatrixCache {
    /// Create a cache from a validated configuration.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let capacity = NonZeroUsize::new(config.max_entries)
            .ok_or(CacheError::InvalidCapacity(config.max_entries))?;
        Ok(Self {
            inner: Mutex::new(LruCache::new(capacity)),
            ttl: config.ttl,
            max_entries: config.max_entries,
            enabled: AtomicBool::new(true),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    /// Look up a matrix by key, refreshing its recency.
    ///
    /// Misses when the cache is disabled or the entry's TTL has lapsed
    /// (a lapsed entry is removed on the spot).
    pub fn get(&self, key: &str) -> Option<Arc<FusionMatrix>> {
        if !self.is_enabled() {
            self.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }
        let mut inner = self.inner.lock();
        let fresh = match inner.get(key) {
            Some(entry) => {
                let lapsed = self
                    .ttl
                    .is_some_and(|ttl| entry.inserted.elapsed() > ttl);
                if lapsed {
                    None
                } else {
                    Some(Arc::clone(&entry.matrix))
                }
            }
            None => None,
        };
        match fresh {
            Some(matrix) => {
                drop(inner);
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key, "matrix cache hit");
                Some(matrix)
            }
            None => {
                if inner.pop(key).is_some() {
                    debug!(key, "matrix cache entry expired");
                }
                drop(inner);
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!(key, "matrix cache miss");
                None
            }
        }
    }

    /// Store a matrix under its key, evicting the least-recently-used
    /// entry when at capacity. No-op while disabled.
    pub fn insert(&self, key: String, matrix: Arc<FusionMatrix>) {
        if !self.is_enabled() {
            return;
        }
        let entry = Entry {
            matrix,
            inserted: Instant::now(),
        };
        let mut inner = self.inner.lock();
        if let Some((evicted_key, _)) = inner.push(key.clone(), entry) {
            if evicted_key != key {
                debug!(key = %evicted_key, "matrix cache evicted lru entry");
            }
        }
    }

    /// Drop every entry. Traffic counters are kept.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Occupancy and traffic snapshot.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.inner.lock().len(),
            max_entries: self.max_entries,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            enabled: self.is_enabled(),
        }
    }

    /// Whether lookups and inserts are live.
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Toggle the cache. Disabling also drops current entries so a
    /// re-enable starts cold.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        if !enabled {
            self.clear();
        }
    }

    /// Turn the cache off; `get` misses and `insert` no-ops afterwards.
    pub fn disable(&self) {
        self.set_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use unmyeong_types::{LAYER_COUNT, Layer, MatrixSummary};

    fn empty_matrix(total: f64) -> Arc<FusionMatrix> {
        Arc::new(FusionMatrix {
            layers: std::array::from_fn::<Layer, LAYER_COUNT, _>(|_| BTreeMap::new()),
            summary: MatrixSummary {
                total_score: total,
                strength_points: Vec::new(),
                balance_points: Vec::new(),
                caution_points: Vec::new(),
                top_synergies: Vec::new(),
            },
        })
    }

    #[test]
    fn rejects_zero_capacity() {
        let err = MatrixCache::new(CacheConfig {
            max_entries: 0,
            ttl: None,
        })
        .unwrap_err();
        assert_eq!(err, CacheError::InvalidCapacity(0));
    }

    #[test]
    fn set_then_get_round_trips() {
        let cache = MatrixCache::new(CacheConfig::default()).unwrap();
        cache.insert("k1".into(), empty_matrix(61.0));
        let got = cache.get("k1").expect("cached");
        assert_eq!(got.summary.total_score, 61.0);
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses, stats.size), (1, 0, 1));
    }

    #[test]
    fn lru_eviction_respects_recency() {
        let cache = MatrixCache::new(CacheConfig {
            max_entries: 2,
            ttl: None,
        })
        .unwrap();
        cache.insert("a".into(), empty_matrix(1.0));
        cache.insert("b".into(), empty_matrix(2.0));
        // Touch "a" so "b" becomes the LRU victim.
        assert!(cache.get("a").is_some());
        cache.insert("c".into(), empty_matrix(3.0));

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
        assert!(cache.stats().size <= 2);
    }

    #[test]
    fn size_never_exceeds_max() {
        let cache = MatrixCache::new(CacheConfig {
            max_entries: 3,
            ttl: None,
        })
        .unwrap();
        for i in 0..20 {
            cache.insert(format!("k{i}"), empty_matrix(i as f64));
            assert!(cache.stats().size <= 3);
        }
    }

    #[test]
    fn disabled_cache_always_misses() {
        let cache = MatrixCache::new(CacheConfig::default()).unwrap();
        cache.insert("k".into(), empty_matrix(5.0));
        cache.disable();
        assert!(cache.get("k").is_none());
        cache.insert("k2".into(), empty_matrix(6.0));
        assert_eq!(cache.stats().size, 0);
        assert!(!cache.is_enabled());
    }

    #[test]
    fn ttl_expires_entries() {
        let cache = MatrixCache::new(CacheConfig {
            max_entries: 4,
            ttl: Some(Duration::from_millis(0)),
        })
        .unwrap();
        cache.insert("k".into(), empty_matrix(7.0));
        std::thread::sleep(Duration::from_millis(2));
        assert!(cache.get("k").is_none());
        assert_eq!(cache.stats().size, 0);
    }
}
