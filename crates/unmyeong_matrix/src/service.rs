//! Matrix computation service: pure calculation plus memoization.

use std::sync::Arc;

use tracing::info;

use unmyeong_cache::{CacheConfig, CacheError, CacheStats, MatrixCache, hash_input};
use unmyeong_types::{FusionMatrix, MatrixInput};

use crate::aggregate::summarize;
use crate::layers::compute_layers;

/// Compute a fusion matrix without touching any cache.
///
/// Deterministic: identical input yields a bit-identical matrix.
pub fn compute_matrix(input: &MatrixInput) -> FusionMatrix {
    let layers = compute_layers(input);
    let summary = summarize(&layers);
    FusionMatrix { layers, summary }
}

/// Calculation handle owning the matrix cache.
///
/// The service is cheap to construct and safe to share (`&self`
/// everywhere); one per process is typical, one per tenant or per test
/// works the same way.
pub struct MatrixService {
    cache: MatrixCache,
}

impl MatrixService {
    /// Build a service with a cache of the given configuration.
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let service = Self {
            cache: MatrixCache::new(config)?,
        };
        info!(
            max_entries = config.max_entries,
            ttl_ms = config.ttl.map(|t| t.as_millis() as u64),
            "matrix service initialized"
        );
        Ok(service)
    }

    /// Compute or recall the matrix for an input.
    pub fn calculate(&self, input: &MatrixInput) -> Arc<FusionMatrix> {
        let key = hash_input(input);
        if let Some(matrix) = self.cache.get(&key) {
            return matrix;
        }
        let matrix = Arc::new(compute_matrix(input));
        self.cache.insert(key, Arc::clone(&matrix));
        matrix
    }

    /// Cached matrix for an input, if one is live.
    pub fn cached(&self, input: &MatrixInput) -> Option<Arc<FusionMatrix>> {
        self.cache.get(&hash_input(input))
    }

    /// Store an externally computed matrix for an input.
    pub fn store(&self, input: &MatrixInput, matrix: Arc<FusionMatrix>) {
        self.cache.insert(hash_input(input), matrix);
    }

    /// Drop all cached matrices.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Cache occupancy and traffic.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Whether memoization is live.
    pub fn is_caching_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    /// Turn memoization off; every call recomputes from then on.
    pub fn disable_cache(&self) {
        self.cache.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unmyeong_types::Element;

    fn service() -> MatrixService {
        MatrixService::new(CacheConfig::default()).unwrap()
    }

    fn sample_input() -> MatrixInput {
        MatrixInput {
            day_master: Element::Fire,
            pillar_elements: vec![Element::Wood, Element::Fire, Element::Earth],
            dominant_western_element: Some(unmyeong_types::WesternElement::Fire),
            ..Default::default()
        }
    }

    #[test]
    fn second_call_hits_cache() {
        let service = service();
        let first = service.calculate(&sample_input());
        let second = service.calculate(&sample_input());
        assert!(Arc::ptr_eq(&first, &second));
        let stats = service.cache_stats();
        assert_eq!((stats.hits, stats.misses), (1, 1));
    }

    #[test]
    fn disabled_service_recomputes() {
        let service = service();
        service.disable_cache();
        let first = service.calculate(&sample_input());
        let second = service.calculate(&sample_input());
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn order_and_lang_share_one_entry() {
        let service = service();
        let a = sample_input();
        let mut b = sample_input();
        b.pillar_elements.reverse();
        b.lang = Some("ko".into());

        let first = service.calculate(&a);
        let second = service.calculate(&b);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(service.cache_stats().size, 1);
    }
}
