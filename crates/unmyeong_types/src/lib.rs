//! Closed domain vocabulary for the destiny fusion matrix.
//!
//! This crate defines the fixed taxonomies both analysis traditions are
//! mapped into before any scoring happens:
//! - Eastern (Saju): 5 elements, 10 sibsin, 12 life stages, shinsal
//!   markers, pillar relations, geokguk patterns
//! - Western (natal): 4 elements, 12 zodiac signs, planets, aspect
//!   types, asteroids, extra points, houses 1-12
//!
//! Every vocabulary is a closed enum with a `from_name` alias-table
//! constructor; upstream tags that resolve to no variant are dropped by
//! the normalizer, never guessed. All tables here are universal
//! conventions of the respective traditions, not tunable parameters.

pub mod element;
pub mod input;
pub mod matrix;
pub mod saju;
pub mod zodiac;

pub use element::{
    ALL_ELEMENTS, ALL_WESTERN_ELEMENTS, Element, FivePhaseRelation, WesternElement,
    east_west_affinity,
};
pub use input::{Aspect, MatrixInput, PillarRelation, Transit};
pub use matrix::{
    Cell, FusionMatrix, InteractionLevel, LAYER_COUNT, Layer, MatrixSummary, SummaryPoint,
};
pub use saju::{
    ALL_GEOKGUK, ALL_SHINSAL, ALL_SIBSIN, ALL_STAGES, Geokguk, Pillar, RelationKind, Shinsal,
    Sibsin, SibsinGroup, TwelveStage,
};
pub use zodiac::{
    ALL_ASPECT_TYPES, ALL_ASTEROIDS, ALL_EXTRA_POINTS, ALL_PLANETS, ALL_SIGNS, AspectType,
    Asteroid, ExtraPoint, House, HouseClass, Planet, ZodiacSign,
};
