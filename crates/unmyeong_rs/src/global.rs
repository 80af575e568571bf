//! Process-global matrix service.
//!
//! The explicit [`MatrixService`] stays the primary interface; this
//! module wraps one instance in a `OnceLock` for callers that want
//! module-level functions. Call [`init_matrix_cache`] before first use
//! to size the cache; otherwise the default configuration applies from
//! the first calculation.

use std::sync::{Arc, OnceLock};

use unmyeong_cache::{CacheConfig, CacheError, CacheStats};
use unmyeong_matrix::MatrixService;
use unmyeong_types::{FusionMatrix, MatrixInput};

static SERVICE: OnceLock<MatrixService> = OnceLock::new();

fn service() -> &'static MatrixService {
    SERVICE.get_or_init(|| {
        match MatrixService::new(CacheConfig::default()) {
            Ok(service) => service,
            // Default capacity is non-zero; construction cannot fail.
            Err(_) => unreachable!("default cache config is valid"),
        }
    })
}

/// Initialize the global service with an explicit cache configuration.
///
/// Errors with [`CacheError::InvalidCapacity`] on a zero capacity and
/// [`CacheError::AlreadyInitialized`] when the service already exists
/// (whether from an earlier init or from first use with the default).
pub fn init_matrix_cache(config: CacheConfig) -> Result<(), CacheError> {
    let service = MatrixService::new(config)?;
    SERVICE
        .set(service)
        .map_err(|_| CacheError::AlreadyInitialized)
}

/// Whether the global service has been created.
pub fn is_initialized() -> bool {
    SERVICE.get().is_some()
}

/// Compute or recall the fusion matrix for an input.
pub fn calculate_destiny_matrix(input: &MatrixInput) -> Arc<FusionMatrix> {
    service().calculate(input)
}

/// Cached matrix for an input, if one is live.
pub fn get_cached_matrix(input: &MatrixInput) -> Option<Arc<FusionMatrix>> {
    service().cached(input)
}

/// Store an externally computed matrix for an input.
pub fn set_cached_matrix(input: &MatrixInput, matrix: Arc<FusionMatrix>) {
    service().store(input, matrix);
}

/// Drop all cached matrices.
pub fn clear_matrix_cache() {
    service().clear_cache();
}

/// Cache occupancy and traffic.
pub fn matrix_cache_stats() -> CacheStats {
    service().cache_stats()
}

/// Whether memoization is live.
pub fn is_caching_enabled() -> bool {
    service().is_caching_enabled()
}

/// Turn memoization off process-wide; calculations recompute from then
/// on. Useful for short-lived runs that would never see a hit.
pub fn disable_matrix_cache() {
    service().disable_cache();
}
