//! Canonical matrix-calculation input.
//!
//! A `MatrixInput` is the normalized fusion request: every tag has
//! already been resolved into the closed vocabularies, unknown tags
//! dropped, and per-field defaults applied. The struct is referentially
//! transparent: two inputs with identical semantic content (regardless
//! of array order or presentation fields) hash identically and produce
//! identical matrices.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::element::{Element, WesternElement};
use crate::saju::{Geokguk, Pillar, RelationKind, Shinsal, Sibsin, TwelveStage};
use crate::zodiac::{AspectType, Asteroid, ExtraPoint, House, Planet, ZodiacSign};

/// Maximum pillar element tags (4 stems + 4 branches).
pub const MAX_PILLAR_ELEMENTS: usize = 8;

/// A stem-branch relation between pillars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PillarRelation {
    /// Kind of relation.
    pub kind: RelationKind,
    /// Pillars participating in the relation.
    pub pillars: Vec<Pillar>,
    /// Free-form qualifier from upstream (e.g. the branch pair).
    pub detail: Option<String>,
}

/// A natal aspect between two planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub planet1: Planet,
    pub planet2: Planet,
    pub kind: AspectType,
    /// Orb in degrees, when upstream supplies one.
    pub orb: Option<f64>,
    /// Angle in degrees; filled from `kind.exact_angle()` when absent.
    pub angle: f64,
}

/// A current transit contact against the natal chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transit {
    /// Transiting planet.
    pub planet: Planet,
    /// Aspect formed to the natal point.
    pub kind: AspectType,
    /// Natal planet being contacted.
    pub natal: Planet,
}

/// Canonical, fully resolved fusion request.
///
/// `lang` and `profile_context` are presentation-only: they are excluded
/// from the cache hash and must not influence any computed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixInput {
    /// Day-master element. Defaults to Earth when upstream omits it.
    pub day_master: Element,
    /// Element tags of the pillar stems and branches, up to 8.
    pub pillar_elements: Vec<Element>,
    /// Count of each sibsin across the chart.
    pub sibsin_distribution: BTreeMap<Sibsin, u32>,
    /// Count of each life stage across the pillars.
    pub twelve_stages: BTreeMap<TwelveStage, u32>,
    /// Stem-branch relations between pillars.
    pub relations: Vec<PillarRelation>,
    /// Structural pattern, when upstream classified one.
    pub geokguk: Option<Geokguk>,
    /// Useful element, when upstream derived one.
    pub yongsin: Option<Element>,
    /// Element of the current 10-year luck period.
    pub daeun_element: Option<Element>,
    /// Element of the current annual period.
    pub saeun_element: Option<Element>,
    /// Shinsal markers present in the chart.
    pub shinsal: BTreeSet<Shinsal>,
    /// Dominant element of the natal chart.
    pub dominant_western_element: Option<WesternElement>,
    /// House placement per planet.
    pub planet_houses: BTreeMap<Planet, House>,
    /// Sign placement per planet.
    pub planet_signs: BTreeMap<Planet, ZodiacSign>,
    /// Natal aspects.
    pub aspects: Vec<Aspect>,
    /// Current transit contacts.
    pub active_transits: Vec<Transit>,
    /// House placement per asteroid.
    pub asteroid_houses: BTreeMap<Asteroid, House>,
    /// Sign placement per extra point.
    pub extra_point_signs: BTreeMap<ExtraPoint, ZodiacSign>,
    /// Presentation language. Never affects computation.
    pub lang: Option<String>,
    /// Free-form presentation context. Never affects computation.
    pub profile_context: Option<String>,
}

impl Default for MatrixInput {
    fn default() -> Self {
        Self {
            day_master: Element::Earth,
            pillar_elements: Vec::new(),
            sibsin_distribution: BTreeMap::new(),
            twelve_stages: BTreeMap::new(),
            relations: Vec::new(),
            geokguk: None,
            yongsin: None,
            daeun_element: None,
            saeun_element: None,
            shinsal: BTreeSet::new(),
            dominant_western_element: None,
            planet_houses: BTreeMap::new(),
            planet_signs: BTreeMap::new(),
            aspects: Vec::new(),
            active_transits: Vec::new(),
            asteroid_houses: BTreeMap::new(),
            extra_point_signs: BTreeMap::new(),
            lang: None,
            profile_context: None,
        }
    }
}

impl MatrixInput {
    /// Dominant Western element, falling back to the most common sign
    /// element among planet placements when upstream did not supply one.
    pub fn effective_western_element(&self) -> Option<WesternElement> {
        if self.dominant_western_element.is_some() {
            return self.dominant_western_element;
        }
        let mut counts = [0u32; 4];
        for sign in self.planet_signs.values() {
            counts[sign.element().index() as usize] += 1;
        }
        let (best, n) = counts
            .iter()
            .enumerate()
            .max_by_key(|&(i, &c)| (c, std::cmp::Reverse(i)))?;
        if *n == 0 {
            return None;
        }
        crate::element::ALL_WESTERN_ELEMENTS.get(best).copied()
    }
}
