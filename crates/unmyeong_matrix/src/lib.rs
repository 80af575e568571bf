//! Ten-layer destiny fusion matrix calculator.
//!
//! Cross-references a normalized Saju profile and a Western natal chart
//! into scored interaction cells across ten fixed layer pairings, then
//! reduces them into a weighted summary. Calculation is pure and
//! deterministic; memoization lives in `unmyeong_cache` and is wired in
//! by [`MatrixService`].

pub mod aggregate;
pub mod layers;
pub mod normalize;
pub mod service;

pub use aggregate::{CAUTION_THRESHOLD, STRENGTH_THRESHOLD, TOP_SYNERGY_COUNT, summarize};
pub use layers::compute_layers;
pub use normalize::{
    RawAspect, RawAstroRecord, RawPillar, RawRelation, RawSajuRecord, RawTransit, normalize,
};
pub use service::{MatrixService, compute_matrix};
