//! Convenience wrapper for the unmyeong destiny-fusion core.
//!
//! Provides a process-global matrix service and module-level functions
//! so callers don't manage `MatrixService` handles directly, plus flat
//! re-exports of the whole public surface.
//!
//! # Quick start
//!
//! ```rust
//! use unmyeong_rs::*;
//!
//! // Optional: size the cache before first use.
//! let _ = init_matrix_cache(CacheConfig { max_entries: 512, ttl: None });
//!
//! let input = MatrixInput {
//!     day_master: Element::Fire,
//!     dominant_western_element: Some(WesternElement::Fire),
//!     ..Default::default()
//! };
//! let matrix = calculate_destiny_matrix(&input);
//! assert!(matrix.summary.total_score >= 0.0);
//!
//! let result = calculate_grade(&GradeInput { score: 75.0, ..Default::default() });
//! assert_eq!(result.grade, Grade::Best);
//! ```

pub mod global;

pub use global::{
    calculate_destiny_matrix, clear_matrix_cache, disable_matrix_cache, get_cached_matrix,
    init_matrix_cache, is_caching_enabled, is_initialized, matrix_cache_stats, set_cached_matrix,
};

// Re-export core types so callers only need `use unmyeong_rs::*`.
pub use unmyeong_cache::{CacheConfig, CacheError, CacheStats, MatrixCache, hash_input};
pub use unmyeong_matrix::{
    MatrixService, RawAspect, RawAstroRecord, RawPillar, RawRelation, RawSajuRecord, RawTransit,
    compute_matrix, normalize,
};
pub use unmyeong_types::{
    Aspect, AspectType, Asteroid, Cell, Element, ExtraPoint, FusionMatrix, Geokguk, House,
    HouseClass, InteractionLevel, Layer, MatrixInput, MatrixSummary, Pillar, PillarRelation,
    Planet, RelationKind, Shinsal, Sibsin, SibsinGroup, SummaryPoint, Transit, TwelveStage,
    WesternElement, ZodiacSign,
};

// Grade API.
pub use unmyeong_grade::{
    Grade, GradeInput, GradeKeys, GradeResult, Recommendation, calculate_grade,
    filter_warnings_by_grade, grade_keys, grade_recommendations,
};
