//! Input normalization.
//!
//! Upstream engines deliver partially-populated, string-tagged records.
//! Normalization resolves every tag into the closed vocabularies,
//! applies documented defaults, and drops what it cannot resolve — an
//! unknown tag is never guessed into a variant.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use unmyeong_types::input::MAX_PILLAR_ELEMENTS;
use unmyeong_types::{
    Aspect, AspectType, Asteroid, Element, ExtraPoint, Geokguk, House, MatrixInput, Pillar,
    PillarRelation, Planet, RelationKind, Shinsal, Sibsin, Transit, TwelveStage, WesternElement,
    ZodiacSign,
};

/// Minimum distinct sibsin keys for an explicit distribution to win
/// over the pillar tally.
const SIBSIN_EXPLICIT_MIN_KEYS: usize = 2;
/// Minimum total count for an explicit distribution to win.
const SIBSIN_EXPLICIT_MIN_TOTAL: u32 = 3;

/// One pillar as delivered by the Saju engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPillar {
    pub stem_element: Option<String>,
    pub branch_element: Option<String>,
    pub stem_sibsin: Option<String>,
    pub branch_sibsin: Option<String>,
    pub stage: Option<String>,
}

/// A stem-branch relation as delivered by the Saju engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRelation {
    pub kind: Option<String>,
    pub pillars: Vec<String>,
    pub detail: Option<String>,
}

/// Saju-side upstream record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSajuRecord {
    pub day_master_element: Option<String>,
    /// Year, month, day, hour order.
    pub pillars: Vec<RawPillar>,
    pub sibsin_distribution: HashMap<String, u32>,
    pub twelve_stages: HashMap<String, u32>,
    pub relations: Vec<RawRelation>,
    pub shinsal: Vec<String>,
    pub geokguk: Option<String>,
    pub yongsin: Option<String>,
    pub daeun_element: Option<String>,
    pub saeun_element: Option<String>,
}

/// A natal aspect as delivered by the astrology engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAspect {
    pub planet1: Option<String>,
    pub planet2: Option<String>,
    pub kind: Option<String>,
    pub orb: Option<f64>,
    pub angle: Option<f64>,
}

/// A transit contact as delivered by the astrology engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawTransit {
    pub planet: Option<String>,
    pub kind: Option<String>,
    pub natal: Option<String>,
}

/// Astrology-side upstream record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAstroRecord {
    pub dominant_element: Option<String>,
    pub planet_houses: HashMap<String, u8>,
    pub planet_signs: HashMap<String, String>,
    pub aspects: Vec<RawAspect>,
    pub active_transits: Vec<RawTransit>,
    pub asteroid_houses: HashMap<String, u8>,
    pub extra_point_signs: HashMap<String, String>,
    pub lang: Option<String>,
    pub profile_context: Option<String>,
}

/// Build the canonical input from upstream records.
///
/// Pure: same records in, same input out. Missing `day_master_element`
/// falls back to Earth; every other unresolvable tag is dropped.
pub fn normalize(saju: &RawSajuRecord, astro: &RawAstroRecord) -> MatrixInput {
    let day_master = saju
        .day_master_element
        .as_deref()
        .and_then(Element::from_name)
        .unwrap_or(Element::Earth);

    let mut pillar_elements = Vec::new();
    for pillar in &saju.pillars {
        for tag in [&pillar.stem_element, &pillar.branch_element].into_iter().flatten() {
            match Element::from_name(tag) {
                Some(e) if pillar_elements.len() < MAX_PILLAR_ELEMENTS => pillar_elements.push(e),
                Some(_) => {}
                None => debug!(tag = %tag, "dropping unknown pillar element"),
            }
        }
    }

    MatrixInput {
        day_master,
        pillar_elements,
        sibsin_distribution: resolve_sibsin(saju),
        twelve_stages: resolve_stages(saju),
        relations: resolve_relations(&saju.relations),
        geokguk: saju.geokguk.as_deref().and_then(Geokguk::from_name),
        yongsin: saju.yongsin.as_deref().and_then(Element::from_name),
        daeun_element: saju.daeun_element.as_deref().and_then(Element::from_name),
        saeun_element: saju.saeun_element.as_deref().and_then(Element::from_name),
        shinsal: resolve_shinsal(&saju.shinsal),
        dominant_western_element: astro
            .dominant_element
            .as_deref()
            .and_then(WesternElement::from_name),
        planet_houses: resolve_houses(&astro.planet_houses, Planet::from_name),
        planet_signs: resolve_signs(&astro.planet_signs, Planet::from_name),
        aspects: resolve_aspects(&astro.aspects),
        active_transits: resolve_transits(&astro.active_transits),
        asteroid_houses: resolve_houses(&astro.asteroid_houses, Asteroid::from_name),
        extra_point_signs: resolve_signs(&astro.extra_point_signs, ExtraPoint::from_name),
        lang: astro.lang.clone(),
        profile_context: astro.profile_context.clone(),
    }
}

/// Prefer the explicit distribution only when it is substantial
/// (≥2 distinct keys, total ≥3); otherwise tally the pillars.
fn resolve_sibsin(saju: &RawSajuRecord) -> BTreeMap<Sibsin, u32> {
    let explicit: BTreeMap<Sibsin, u32> = saju
        .sibsin_distribution
        .iter()
        .filter_map(|(tag, &count)| Sibsin::from_name(tag).map(|s| (s, count)))
        .filter(|&(_, count)| count > 0)
        .collect();
    let total: u32 = explicit.values().sum();
    if explicit.len() >= SIBSIN_EXPLICIT_MIN_KEYS && total >= SIBSIN_EXPLICIT_MIN_TOTAL {
        return explicit;
    }

    let mut tally = BTreeMap::new();
    for pillar in &saju.pillars {
        for tag in [&pillar.stem_sibsin, &pillar.branch_sibsin].into_iter().flatten() {
            match Sibsin::from_name(tag) {
                Some(s) => *tally.entry(s).or_insert(0) += 1,
                None => debug!(tag = %tag, "dropping unknown sibsin"),
            }
        }
    }
    tally
}

/// Explicit stage counts when present, else a tally of pillar stages.
fn resolve_stages(saju: &RawSajuRecord) -> BTreeMap<TwelveStage, u32> {
    let explicit: BTreeMap<TwelveStage, u32> = saju
        .twelve_stages
        .iter()
        .filter_map(|(tag, &count)| TwelveStage::from_name(tag).map(|s| (s, count)))
        .filter(|&(_, count)| count > 0)
        .collect();
    if !explicit.is_empty() {
        return explicit;
    }

    let mut tally = BTreeMap::new();
    for stage in saju.pillars.iter().filter_map(|p| p.stage.as_deref()) {
        match TwelveStage::from_name(stage) {
            Some(s) => *tally.entry(s).or_insert(0) += 1,
            None => debug!(tag = %stage, "dropping unknown stage"),
        }
    }
    tally
}

fn resolve_relations(raw: &[RawRelation]) -> Vec<PillarRelation> {
    raw.iter()
        .filter_map(|r| {
            let kind = r.kind.as_deref().and_then(RelationKind::from_name)?;
            let pillars: Vec<Pillar> = r
                .pillars
                .iter()
                .filter_map(|tag| Pillar::from_name(tag))
                .collect();
            Some(PillarRelation {
                kind,
                pillars,
                detail: r.detail.clone(),
            })
        })
        .collect()
}

/// Deduplicates through the set; unknown names are dropped.
fn resolve_shinsal(raw: &[String]) -> BTreeSet<Shinsal> {
    let mut out = BTreeSet::new();
    for tag in raw {
        match Shinsal::from_name(tag) {
            Some(s) => {
                out.insert(s);
            }
            None => debug!(tag = %tag, "dropping unknown shinsal"),
        }
    }
    out
}

fn resolve_houses<K: Ord>(
    raw: &HashMap<String, u8>,
    key: impl Fn(&str) -> Option<K>,
) -> BTreeMap<K, House> {
    raw.iter()
        .filter_map(|(tag, &n)| Some((key(tag)?, House::new(n)?)))
        .collect()
}

fn resolve_signs<K: Ord>(
    raw: &HashMap<String, String>,
    key: impl Fn(&str) -> Option<K>,
) -> BTreeMap<K, ZodiacSign> {
    raw.iter()
        .filter_map(|(tag, sign)| Some((key(tag)?, ZodiacSign::from_name(sign)?)))
        .collect()
}

/// Aspects with an unknown type or unresolvable planet are discarded;
/// a missing angle is filled from the fixed per-type table.
fn resolve_aspects(raw: &[RawAspect]) -> Vec<Aspect> {
    raw.iter()
        .filter_map(|a| {
            let planet1 = a.planet1.as_deref().and_then(Planet::from_name)?;
            let planet2 = a.planet2.as_deref().and_then(Planet::from_name)?;
            let kind = a.kind.as_deref().and_then(AspectType::from_name)?;
            let angle = match a.angle {
                Some(angle) if angle.is_finite() => angle,
                _ => kind.exact_angle(),
            };
            Some(Aspect {
                planet1,
                planet2,
                kind,
                orb: a.orb.filter(|o| o.is_finite()),
                angle,
            })
        })
        .collect()
}

fn resolve_transits(raw: &[RawTransit]) -> Vec<Transit> {
    raw.iter()
        .filter_map(|t| {
            Some(Transit {
                planet: t.planet.as_deref().and_then(Planet::from_name)?,
                kind: t.kind.as_deref().and_then(AspectType::from_name)?,
                natal: t.natal.as_deref().and_then(Planet::from_name)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar(stem: &str, branch: &str, sibsin: (&str, &str), stage: &str) -> RawPillar {
        RawPillar {
            stem_element: Some(stem.into()),
            branch_element: Some(branch.into()),
            stem_sibsin: Some(sibsin.0.into()),
            branch_sibsin: Some(sibsin.1.into()),
            stage: Some(stage.into()),
        }
    }

    #[test]
    fn day_master_defaults_to_earth() {
        let input = normalize(&RawSajuRecord::default(), &RawAstroRecord::default());
        assert_eq!(input.day_master, Element::Earth);
    }

    #[test]
    fn thin_explicit_distribution_falls_back_to_tally() {
        let saju = RawSajuRecord {
            // One key, total 2: below both thresholds.
            sibsin_distribution: HashMap::from([("siksin".to_owned(), 2)]),
            pillars: vec![
                pillar("wood", "fire", ("bigyeon", "siksin"), "jangsaeng"),
                pillar("earth", "earth", ("pyeonjae", "siksin"), "jewang"),
            ],
            ..Default::default()
        };
        let input = normalize(&saju, &RawAstroRecord::default());
        assert_eq!(input.sibsin_distribution.get(&Sibsin::Siksin), Some(&2));
        assert_eq!(input.sibsin_distribution.get(&Sibsin::Bigyeon), Some(&1));
        assert_eq!(input.sibsin_distribution.get(&Sibsin::Pyeonjae), Some(&1));
    }

    #[test]
    fn substantial_explicit_distribution_wins() {
        let saju = RawSajuRecord {
            sibsin_distribution: HashMap::from([
                ("siksin".to_owned(), 2),
                ("jeonggwan".to_owned(), 2),
            ]),
            pillars: vec![pillar("wood", "fire", ("bigyeon", "bigyeon"), "tae")],
            ..Default::default()
        };
        let input = normalize(&saju, &RawAstroRecord::default());
        assert_eq!(input.sibsin_distribution.len(), 2);
        assert!(!input.sibsin_distribution.contains_key(&Sibsin::Bigyeon));
    }

    #[test]
    fn unknown_tags_are_dropped_not_guessed() {
        let saju = RawSajuRecord {
            shinsal: vec!["dohwa".into(), "dohwa".into(), "mystery".into()],
            geokguk: Some("unheard-of".into()),
            ..Default::default()
        };
        let astro = RawAstroRecord {
            planet_signs: HashMap::from([
                ("venus".to_owned(), "libra".to_owned()),
                ("vulcan".to_owned(), "libra".to_owned()),
            ]),
            planet_houses: HashMap::from([("mars".to_owned(), 13)]),
            ..Default::default()
        };
        let input = normalize(&saju, &astro);
        assert_eq!(input.shinsal.len(), 1);
        assert!(input.geokguk.is_none());
        assert_eq!(input.planet_signs.len(), 1);
        assert!(input.planet_houses.is_empty());
    }

    #[test]
    fn aspect_angles_fill_from_type_table() {
        let astro = RawAstroRecord {
            aspects: vec![
                RawAspect {
                    planet1: Some("sun".into()),
                    planet2: Some("moon".into()),
                    kind: Some("trine".into()),
                    orb: Some(1.2),
                    angle: None,
                },
                RawAspect {
                    planet1: Some("mars".into()),
                    planet2: Some("venus".into()),
                    kind: Some("septile".into()),
                    orb: None,
                    angle: Some(51.4),
                },
            ],
            ..Default::default()
        };
        let input = normalize(&RawSajuRecord::default(), &astro);
        assert_eq!(input.aspects.len(), 1);
        assert_eq!(input.aspects[0].angle, 120.0);
    }

    #[test]
    fn pillar_elements_keep_order_and_cap() {
        let saju = RawSajuRecord {
            pillars: vec![
                pillar("wood", "fire", ("bigyeon", "siksin"), "tae"),
                pillar("water", "metal", ("jeongin", "pyeongwan"), "sa"),
                pillar("earth", "earth", ("pyeonjae", "jeongjae"), "myo"),
                pillar("fire", "wood", ("sanggwan", "geopjae"), "jewang"),
                pillar("fire", "wood", ("sanggwan", "geopjae"), "jewang"),
            ],
            ..Default::default()
        };
        let input = normalize(&saju, &RawAstroRecord::default());
        assert_eq!(input.pillar_elements.len(), 8);
        assert_eq!(
            &input.pillar_elements[..4],
            &[Element::Wood, Element::Fire, Element::Water, Element::Metal]
        );
    }
}
