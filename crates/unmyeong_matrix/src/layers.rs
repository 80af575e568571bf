//! The ten fusion layers.
//!
//! Each layer is a pure function over the normalized input, producing
//! interaction cells for one fixed pairing of domains. Interaction
//! rules live in const tables keyed by closed-enum pairs; a pair with
//! no rule contributes no cell, which is the common case, not an error.
//!
//! Cell keys are `"<left>-<right>"` over canonical tags. When the same
//! pair arises more than once (e.g. two aspects of the same type), the
//! scores accumulate into one cell and its level is recomputed from the
//! new magnitude.

use std::collections::BTreeMap;

use unmyeong_types::{
    Asteroid, Cell, Element, FivePhaseRelation, InteractionLevel, LAYER_COUNT, Layer, MatrixInput,
    Planet, Shinsal, SibsinGroup, WesternElement,
};

/// Weight of the day master within the element layer.
const DAY_MASTER_WEIGHT: f64 = 3.0;
/// Per-occurrence weight of a pillar element.
const PILLAR_ELEMENT_WEIGHT: f64 = 1.5;

/// Add `score` into the cell for `key`, creating it if absent.
fn upsert(layer: &mut Layer, key: String, score: f64, detail: Option<&'static str>) {
    layer
        .entry(key)
        .and_modify(|cell| {
            cell.score += score;
            cell.level = InteractionLevel::from_abs_score(cell.score.abs());
        })
        .or_insert_with(|| match detail {
            Some(d) => Cell::annotated(score, d),
            None => Cell::scored(score),
        });
}

fn pair_key(left: &str, right: &str) -> String {
    format!("{left}-{right}")
}

fn house_key(left: &str, house: u8) -> String {
    format!("{left}-house{house}")
}

// ---------------------------------------------------------------------------
// Layer 1: Eastern element × Western element
// ---------------------------------------------------------------------------

/// Day-master and pillar elements against the chart's dominant Western
/// element, scored through the east-west affinity table.
pub fn element_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    let Some(west) = input.effective_western_element() else {
        return layer;
    };

    let mut weights: BTreeMap<Element, f64> = BTreeMap::new();
    *weights.entry(input.day_master).or_insert(0.0) += DAY_MASTER_WEIGHT;
    for &e in &input.pillar_elements {
        *weights.entry(e).or_insert(0.0) += PILLAR_ELEMENT_WEIGHT;
    }

    for (east, weight) in weights {
        let affinity = f64::from(unmyeong_types::east_west_affinity(east, west));
        let detail = (east == input.day_master).then_some("day master resonance");
        upsert(
            &mut layer,
            pair_key(east.name(), west.name()),
            affinity * weight,
            detail,
        );
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 2: sibsin × planet
// ---------------------------------------------------------------------------

/// Correspondences between sibsin categories and natal planets.
const SIBSIN_PLANET_RULES: &[(unmyeong_types::Sibsin, Planet, f64)] = {
    use unmyeong_types::Sibsin::*;
    &[
        (Bigyeon, Planet::Mars, 6.0),
        (Bigyeon, Planet::Sun, 5.0),
        (Geopjae, Planet::Mars, -7.0),
        (Geopjae, Planet::Pluto, -6.0),
        (Siksin, Planet::Venus, 8.0),
        (Siksin, Planet::Jupiter, 7.0),
        (Sanggwan, Planet::Mercury, 6.0),
        (Sanggwan, Planet::Uranus, -5.0),
        (Sanggwan, Planet::Saturn, -7.0),
        (Pyeonjae, Planet::Jupiter, 7.0),
        (Pyeonjae, Planet::Uranus, 5.0),
        (Jeongjae, Planet::Venus, 7.0),
        (Jeongjae, Planet::Saturn, 5.0),
        (Pyeongwan, Planet::Pluto, -8.0),
        (Pyeongwan, Planet::Saturn, -6.0),
        (Pyeongwan, Planet::Mars, 5.0),
        (Jeonggwan, Planet::Saturn, 8.0),
        (Jeonggwan, Planet::Sun, 6.0),
        (Pyeonin, Planet::Neptune, 6.0),
        (Pyeonin, Planet::Moon, -5.0),
        (Jeongin, Planet::Moon, 8.0),
        (Jeongin, Planet::Jupiter, 6.0),
    ]
};

/// Sibsin distribution against placed planets.
pub fn sibsin_planet_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    for &(sibsin, planet, base) in SIBSIN_PLANET_RULES {
        let Some(&count) = input.sibsin_distribution.get(&sibsin) else {
            continue;
        };
        if count == 0 || !input.planet_houses.contains_key(&planet) {
            continue;
        }
        // A repeated sibsin strengthens the contact, with diminishing weight.
        let multiplier = 1.0 + 0.2 * f64::from(count.min(4) - 1);
        upsert(
            &mut layer,
            pair_key(sibsin.name(), planet.name()),
            base * multiplier,
            None,
        );
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 3: sibsin × house
// ---------------------------------------------------------------------------

/// Sibsin-group themes resonating with specific houses.
const SIBSIN_HOUSE_RULES: &[(SibsinGroup, u8, f64)] = &[
    (SibsinGroup::Jaeseong, 2, 7.0),
    (SibsinGroup::Jaeseong, 8, 5.0),
    (SibsinGroup::Gwanseong, 10, 8.0),
    (SibsinGroup::Gwanseong, 6, 4.0),
    (SibsinGroup::Inseong, 9, 6.0),
    (SibsinGroup::Inseong, 4, 4.0),
    (SibsinGroup::Siksang, 5, 7.0),
    (SibsinGroup::Siksang, 3, 4.0),
    (SibsinGroup::Bigyeop, 1, 6.0),
    (SibsinGroup::Bigyeop, 11, 5.0),
    (SibsinGroup::Bigyeop, 7, -5.0),
];

/// Sibsin groups against house occupancy.
pub fn sibsin_house_layer(input: &MatrixInput) -> Layer {
    let mut occupancy: BTreeMap<u8, u32> = BTreeMap::new();
    for house in input.planet_houses.values() {
        *occupancy.entry(house.number()).or_insert(0) += 1;
    }

    let mut layer = Layer::new();
    for (&sibsin, &count) in &input.sibsin_distribution {
        if count == 0 {
            continue;
        }
        for &(group, house, base) in SIBSIN_HOUSE_RULES {
            if sibsin.group() != group {
                continue;
            }
            let Some(&occupants) = occupancy.get(&house) else {
                continue;
            };
            let score = base * f64::from(occupants.min(3)) * f64::from(count.min(3));
            upsert(&mut layer, house_key(sibsin.name(), house), score, None);
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 4: timing × timing
// ---------------------------------------------------------------------------

/// Score for the daeun element meeting the saeun element.
fn period_meeting_score(relation: FivePhaseRelation) -> (f64, &'static str) {
    match relation {
        FivePhaseRelation::Same => (4.0, "periods share one element"),
        FivePhaseRelation::Generates => (8.0, "decade period feeds the year"),
        FivePhaseRelation::GeneratedBy => (6.0, "year feeds the decade period"),
        FivePhaseRelation::Overcomes => (-5.0, "decade period suppresses the year"),
        FivePhaseRelation::OvercomeBy => (-8.0, "year suppresses the decade period"),
    }
}

/// Weight of a transit by the mover: outer planets mark longer weather.
fn transit_weight(planet: Planet) -> f64 {
    if planet.is_outer() { 4.0 } else { 2.5 }
}

/// Eastern period timing (daeun × saeun) alongside Western transit
/// contacts — both sides of the current-time picture in one layer.
pub fn timing_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();

    if let (Some(daeun), Some(saeun)) = (input.daeun_element, input.saeun_element) {
        let (score, detail) = period_meeting_score(daeun.relation_to(saeun));
        upsert(
            &mut layer,
            pair_key(&format!("daeun-{}", daeun.name()), &format!("saeun-{}", saeun.name())),
            score,
            Some(detail),
        );
    }

    for transit in &input.active_transits {
        let score = f64::from(transit.kind.tone()) * transit_weight(transit.planet);
        if score == 0.0 {
            continue;
        }
        let key = format!(
            "transit-{}-{}-{}",
            transit.planet.name(),
            transit.kind.name(),
            transit.natal.name()
        );
        upsert(&mut layer, key, score, None);
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 5: pillar relation × aspect
// ---------------------------------------------------------------------------

/// Pillar relations against natal aspects: when both traditions speak
/// with the same sign the relation's tone is amplified; when they
/// disagree it is dampened. A conjunction takes the tone of the
/// relation it meets.
pub fn relation_aspect_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    for relation in &input.relations {
        let rel_tone = f64::from(relation.kind.tone());
        for aspect in &input.aspects {
            let score = match aspect.kind.tone() {
                0 => rel_tone,
                tone if (tone > 0) == (rel_tone > 0.0) => rel_tone * 2.0,
                _ => rel_tone * 0.5,
            };
            upsert(
                &mut layer,
                pair_key(relation.kind.name(), aspect.kind.name()),
                score,
                None,
            );
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 6: life stage × house
// ---------------------------------------------------------------------------

/// Pronounced life stages against non-cadent occupied houses. Weak or
/// cadent combinations stay below the rule floor and emit nothing.
pub fn stage_house_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    let occupied: BTreeMap<u8, u32> = {
        let mut m = BTreeMap::new();
        for house in input.planet_houses.values() {
            *m.entry(house.number()).or_insert(0) += 1;
        }
        m
    };

    for (&stage, &count) in &input.twelve_stages {
        if count == 0 || stage.vitality().abs() < 2 {
            continue;
        }
        for (&house_number, &occupants) in &occupied {
            let house = match unmyeong_types::House::new(house_number) {
                Some(h) => h,
                None => continue,
            };
            let class = house.class();
            if matches!(class, unmyeong_types::HouseClass::Cadent) {
                continue;
            }
            let score = f64::from(stage.vitality())
                * class.weight()
                * 0.8
                * f64::from(count.min(3))
                * f64::from(occupants.min(3));
            upsert(&mut layer, house_key(stage.name(), house_number), score, None);
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 7: advanced Saju × advanced Western
// ---------------------------------------------------------------------------

/// Weight of the yongsin meeting the chart temperament.
const YONGSIN_WEIGHT: f64 = 3.0;

/// Geokguk patterns against the dominant Western element.
const GEOKGUK_WEST_RULES: &[(SibsinGroup, WesternElement, f64)] = &[
    (SibsinGroup::Siksang, WesternElement::Air, 5.0),
    (SibsinGroup::Siksang, WesternElement::Fire, 4.0),
    (SibsinGroup::Jaeseong, WesternElement::Earth, 6.0),
    (SibsinGroup::Gwanseong, WesternElement::Earth, 5.0),
    (SibsinGroup::Gwanseong, WesternElement::Fire, -4.0),
    (SibsinGroup::Inseong, WesternElement::Water, 6.0),
    (SibsinGroup::Bigyeop, WesternElement::Fire, 5.0),
    (SibsinGroup::Bigyeop, WesternElement::Water, -4.0),
];

/// Higher-order pattern matching: the useful element and the structural
/// pattern against the chart's dominant temperament.
pub fn advanced_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    let Some(west) = input.effective_western_element() else {
        return layer;
    };

    if let Some(yongsin) = input.yongsin {
        let affinity = f64::from(unmyeong_types::east_west_affinity(yongsin, west));
        upsert(
            &mut layer,
            pair_key(&format!("yongsin-{}", yongsin.name()), west.name()),
            affinity * YONGSIN_WEIGHT,
            Some("useful element meets chart temperament"),
        );
    }

    if let Some(geokguk) = input.geokguk {
        let score = match geokguk.core_sibsin() {
            Some(core) => GEOKGUK_WEST_RULES
                .iter()
                .find(|&&(group, element, _)| group == core.group() && element == west)
                .map(|&(_, _, s)| s),
            // Stem-strength patterns: steady with Earth, volatile with Fire.
            None => match (geokguk, west) {
                (unmyeong_types::Geokguk::Geonrok, WesternElement::Earth) => Some(4.0),
                (unmyeong_types::Geokguk::Yangin, WesternElement::Fire) => Some(-5.0),
                _ => None,
            },
        };
        if let Some(score) = score {
            upsert(
                &mut layer,
                pair_key(geokguk.name(), west.name()),
                score,
                None,
            );
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 8: shinsal × planet
// ---------------------------------------------------------------------------

/// Shinsal markers resonating with natal planets.
const SHINSAL_PLANET_RULES: &[(Shinsal, Planet, f64)] = &[
    (Shinsal::Cheoneul, Planet::Jupiter, 9.0),
    (Shinsal::Cheoneul, Planet::Sun, 7.0),
    (Shinsal::Taegeuk, Planet::Jupiter, 6.0),
    (Shinsal::Munchang, Planet::Mercury, 8.0),
    (Shinsal::Dohwa, Planet::Venus, 7.0),
    (Shinsal::Dohwa, Planet::Neptune, -4.0),
    (Shinsal::Yeokma, Planet::Mercury, 5.0),
    (Shinsal::Yeokma, Planet::Jupiter, 4.0),
    (Shinsal::Yeokma, Planet::Uranus, -4.0),
    (Shinsal::Hwagae, Planet::Saturn, 5.0),
    (Shinsal::Hwagae, Planet::Neptune, 6.0),
    (Shinsal::Yangin, Planet::Mars, -8.0),
    (Shinsal::Yangin, Planet::Saturn, -5.0),
    (Shinsal::Baekho, Planet::Mars, -9.0),
    (Shinsal::Baekho, Planet::Pluto, -7.0),
    (Shinsal::Goegang, Planet::Pluto, -6.0),
    (Shinsal::Goegang, Planet::Sun, 5.0),
    (Shinsal::Gwimun, Planet::Neptune, -7.0),
    (Shinsal::Gwimun, Planet::Moon, -5.0),
    (Shinsal::Wonjin, Planet::Moon, -6.0),
    (Shinsal::Wonjin, Planet::Venus, -5.0),
    (Shinsal::Hongyeom, Planet::Venus, 6.0),
    (Shinsal::Hongyeom, Planet::Mars, -3.0),
];

/// Present shinsal against placed planets.
pub fn shinsal_planet_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    for &(shinsal, planet, score) in SHINSAL_PLANET_RULES {
        if !input.shinsal.contains(&shinsal) || !input.planet_houses.contains_key(&planet) {
            continue;
        }
        upsert(
            &mut layer,
            pair_key(shinsal.name(), planet.name()),
            score,
            None,
        );
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 9: asteroid × house
// ---------------------------------------------------------------------------

/// Asteroid themes landing in sympathetic or adverse houses.
const ASTEROID_HOUSE_RULES: &[(Asteroid, u8, f64)] = &[
    (Asteroid::Ceres, 4, 6.0),
    (Asteroid::Ceres, 6, 4.0),
    (Asteroid::Pallas, 3, 5.0),
    (Asteroid::Pallas, 9, 5.0),
    (Asteroid::Juno, 7, 7.0),
    (Asteroid::Juno, 8, 4.0),
    (Asteroid::Vesta, 6, 5.0),
    (Asteroid::Vesta, 12, 4.0),
    (Asteroid::Chiron, 1, -5.0),
    (Asteroid::Chiron, 8, -6.0),
    (Asteroid::Chiron, 12, 3.0),
];

/// Asteroid placements against the rule table.
pub fn asteroid_house_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    for (&asteroid, &house) in &input.asteroid_houses {
        for &(rule_asteroid, rule_house, score) in ASTEROID_HOUSE_RULES {
            if asteroid == rule_asteroid && house.number() == rule_house {
                upsert(
                    &mut layer,
                    house_key(asteroid.name(), rule_house),
                    score,
                    None,
                );
            }
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// Layer 10: extra point × element
// ---------------------------------------------------------------------------

/// Extra points expressing through the element of their sign.
const EXTRA_POINT_RULES: &[(unmyeong_types::ExtraPoint, WesternElement, f64)] = {
    use unmyeong_types::ExtraPoint::*;
    &[
        (NorthNode, WesternElement::Fire, 6.0),
        (NorthNode, WesternElement::Air, 5.0),
        (SouthNode, WesternElement::Water, -4.0),
        (SouthNode, WesternElement::Earth, -3.0),
        (Lilith, WesternElement::Fire, -5.0),
        (Lilith, WesternElement::Water, -6.0),
        (PartOfFortune, WesternElement::Fire, 7.0),
        (PartOfFortune, WesternElement::Earth, 6.0),
        (PartOfFortune, WesternElement::Air, 5.0),
        (PartOfFortune, WesternElement::Water, 5.0),
        (Vertex, WesternElement::Air, 4.0),
        (Vertex, WesternElement::Water, 4.0),
    ]
};

/// Extra-point sign placements against the rule table.
pub fn extra_point_layer(input: &MatrixInput) -> Layer {
    let mut layer = Layer::new();
    for (&point, &sign) in &input.extra_point_signs {
        let element = sign.element();
        for &(rule_point, rule_element, score) in EXTRA_POINT_RULES {
            if point == rule_point && element == rule_element {
                upsert(
                    &mut layer,
                    pair_key(point.name(), element.name()),
                    score,
                    None,
                );
            }
        }
    }
    layer
}

// ---------------------------------------------------------------------------
// All layers
// ---------------------------------------------------------------------------

/// Compute all ten layers in fixed order.
pub fn compute_layers(input: &MatrixInput) -> [Layer; LAYER_COUNT] {
    [
        element_layer(input),
        sibsin_planet_layer(input),
        sibsin_house_layer(input),
        timing_layer(input),
        relation_aspect_layer(input),
        stage_house_layer(input),
        advanced_layer(input),
        shinsal_planet_layer(input),
        asteroid_house_layer(input),
        extra_point_layer(input),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use unmyeong_types::{
        Aspect, AspectType, House, PillarRelation, RelationKind, Sibsin, Transit, TwelveStage,
    };

    fn house(n: u8) -> House {
        House::new(n).unwrap()
    }

    #[test]
    fn element_layer_empty_without_western_side() {
        let input = MatrixInput {
            pillar_elements: vec![Element::Fire, Element::Wood],
            ..Default::default()
        };
        assert!(element_layer(&input).is_empty());
    }

    #[test]
    fn element_layer_weights_day_master() {
        let input = MatrixInput {
            day_master: Element::Fire,
            dominant_western_element: Some(WesternElement::Fire),
            ..Default::default()
        };
        let layer = element_layer(&input);
        let cell = layer.get("fire-fire").expect("day master cell");
        // Affinity 3 at day-master weight 3.
        assert_eq!(cell.score, 9.0);
        assert_eq!(cell.detail, Some("day master resonance"));
    }

    #[test]
    fn sibsin_planet_requires_both_sides() {
        let mut input = MatrixInput::default();
        input.sibsin_distribution.insert(Sibsin::Jeongin, 2);
        // Moon not placed: no cell.
        assert!(sibsin_planet_layer(&input).is_empty());

        input.planet_houses.insert(Planet::Moon, house(4));
        let layer = sibsin_planet_layer(&input);
        let cell = layer.get("jeongin-moon").expect("rule fires");
        assert_eq!(cell.score, 8.0 * 1.2);
    }

    #[test]
    fn timing_layer_scores_period_meeting() {
        let input = MatrixInput {
            daeun_element: Some(Element::Wood),
            saeun_element: Some(Element::Fire),
            ..Default::default()
        };
        let layer = timing_layer(&input);
        let cell = layer.get("daeun-wood-saeun-fire").expect("period cell");
        assert_eq!(cell.score, 8.0);
    }

    #[test]
    fn timing_layer_weighs_outer_transits() {
        let input = MatrixInput {
            active_transits: vec![
                Transit {
                    planet: Planet::Saturn,
                    kind: AspectType::Square,
                    natal: Planet::Sun,
                },
                Transit {
                    planet: Planet::Venus,
                    kind: AspectType::Trine,
                    natal: Planet::Moon,
                },
            ],
            ..Default::default()
        };
        let layer = timing_layer(&input);
        assert_eq!(layer.get("transit-saturn-square-sun").unwrap().score, -4.0);
        assert_eq!(layer.get("transit-venus-trine-moon").unwrap().score, 2.5);
    }

    #[test]
    fn relation_aspect_agreement_amplifies() {
        let input = MatrixInput {
            relations: vec![PillarRelation {
                kind: RelationKind::Chung,
                pillars: vec![],
                detail: None,
            }],
            aspects: vec![
                Aspect {
                    planet1: Planet::Mars,
                    planet2: Planet::Saturn,
                    kind: AspectType::Square,
                    orb: None,
                    angle: 90.0,
                },
                Aspect {
                    planet1: Planet::Sun,
                    planet2: Planet::Moon,
                    kind: AspectType::Conjunction,
                    orb: None,
                    angle: 0.0,
                },
            ],
            ..Default::default()
        };
        let layer = relation_aspect_layer(&input);
        // Clash (-3) meeting a hard aspect: both traditions agree, amplified.
        assert_eq!(layer.get("chung-square").unwrap().score, -6.0);
        // Conjunction takes the clash's own tone.
        assert_eq!(layer.get("chung-conjunction").unwrap().score, -3.0);
    }

    #[test]
    fn relation_aspect_disagreement_dampens() {
        let input = MatrixInput {
            relations: vec![PillarRelation {
                kind: RelationKind::Samhap,
                pillars: vec![],
                detail: None,
            }],
            aspects: vec![Aspect {
                planet1: Planet::Mars,
                planet2: Planet::Saturn,
                kind: AspectType::Square,
                orb: None,
                angle: 90.0,
            }],
            ..Default::default()
        };
        let layer = relation_aspect_layer(&input);
        // Harmony (+3) against a hard aspect: dampened, sign kept.
        assert_eq!(layer.get("samhap-square").unwrap().score, 1.5);
    }

    #[test]
    fn stage_house_skips_weak_and_cadent() {
        let mut input = MatrixInput::default();
        input.twelve_stages.insert(TwelveStage::Jewang, 1);
        input.twelve_stages.insert(TwelveStage::Soe, 2);
        input.planet_houses.insert(Planet::Sun, house(10));
        input.planet_houses.insert(Planet::Moon, house(3));

        let layer = stage_house_layer(&input);
        // Jewang (vitality 3) in the angular 10th fires.
        let cell = layer.get("jewang-house10").expect("angular cell");
        assert_eq!(cell.score, 3.0 * 1.5 * 0.8);
        // Soe is below the vitality floor; house 3 is cadent.
        assert!(layer.get("soe-house10").is_none());
        assert!(layer.get("jewang-house3").is_none());
    }

    #[test]
    fn shinsal_layer_fires_on_present_pairs() {
        let mut input = MatrixInput::default();
        input.shinsal.insert(Shinsal::Cheoneul);
        input.shinsal.insert(Shinsal::Baekho);
        input.planet_houses.insert(Planet::Jupiter, house(1));

        let layer = shinsal_planet_layer(&input);
        assert_eq!(layer.get("cheoneul-jupiter").unwrap().score, 9.0);
        // Mars not placed: Baekho stays silent.
        assert!(layer.get("baekho-mars").is_none());
    }

    #[test]
    fn all_layers_deterministic() {
        let mut input = MatrixInput {
            day_master: Element::Wood,
            pillar_elements: vec![Element::Fire, Element::Water],
            dominant_western_element: Some(WesternElement::Air),
            daeun_element: Some(Element::Metal),
            saeun_element: Some(Element::Water),
            yongsin: Some(Element::Fire),
            ..Default::default()
        };
        input.sibsin_distribution.insert(Sibsin::Siksin, 2);
        input.planet_houses.insert(Planet::Venus, house(5));
        input.shinsal.insert(Shinsal::Dohwa);

        let a = compute_layers(&input);
        let b = compute_layers(&input);
        assert_eq!(a, b);
    }
}
