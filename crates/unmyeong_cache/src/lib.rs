//! Memoization for computed fusion matrices.
//!
//! Two pieces: a canonicalizing hasher that turns a `MatrixInput` into a
//! stable cache key, and a bounded LRU store (optionally TTL'd) keyed by
//! that hash. The hash is a pure function of semantic content — array
//! order and presentation-only fields never change it.

pub mod cache;
pub mod hash;

pub use cache::{CacheConfig, CacheError, CacheStats, MatrixCache};
pub use hash::{canonical_value, hash_input};
