//! Canonicalizing hash over `MatrixInput`.
//!
//! Contract:
//! - array-valued fields are sorted before serialization, so any
//!   permutation of `pillar_elements`, `relations`, `aspects`, or
//!   `active_transits` hashes identically;
//! - map-valued fields serialize with lexicographically sorted keys
//!   (`serde_json::Map` is BTreeMap-backed);
//! - `lang` and `profile_context` are excluded entirely;
//! - optional fields appear only when present, so presence itself is
//!   part of the key.
//!
//! The digest is SHA-256 over the canonical JSON text; output is the
//! fixed form `dfm1:<64 hex chars>`. Determinism across process
//! restarts is what matters here, not cryptographic strength.

use serde_json::{Map, Value, json};
use sha2::{Digest, Sha256};

use unmyeong_types::MatrixInput;

/// Version prefix of the key form. Bump when the canonical form changes.
const KEY_PREFIX: &str = "dfm1";

/// Build the canonical JSON value hashed for cache keying.
///
/// Exposed for tests that assert order- and locale-independence at the
/// structural level.
pub fn canonical_value(input: &MatrixInput) -> Value {
    let mut root = Map::new();

    root.insert("day_master".into(), json!(input.day_master.name()));

    let mut pillar: Vec<&str> = input.pillar_elements.iter().map(|e| e.name()).collect();
    pillar.sort_unstable();
    root.insert("pillar_elements".into(), json!(pillar));

    let mut sibsin = Map::new();
    for (k, v) in &input.sibsin_distribution {
        sibsin.insert(k.name().into(), json!(v));
    }
    root.insert("sibsin_distribution".into(), Value::Object(sibsin));

    let mut stages = Map::new();
    for (k, v) in &input.twelve_stages {
        stages.insert(k.name().into(), json!(v));
    }
    root.insert("twelve_stages".into(), Value::Object(stages));

    let mut relations: Vec<Value> = input
        .relations
        .iter()
        .map(|r| {
            let mut pillars: Vec<&str> = r.pillars.iter().map(|p| p.name()).collect();
            pillars.sort_unstable();
            let mut obj = Map::new();
            obj.insert("kind".into(), json!(r.kind.name()));
            obj.insert("pillars".into(), json!(pillars));
            if let Some(detail) = &r.detail {
                obj.insert("detail".into(), json!(detail));
            }
            Value::Object(obj)
        })
        .collect();
    sort_values(&mut relations);
    root.insert("relations".into(), Value::Array(relations));

    if let Some(g) = input.geokguk {
        root.insert("geokguk".into(), json!(g.name()));
    }
    if let Some(y) = input.yongsin {
        root.insert("yongsin".into(), json!(y.name()));
    }
    if let Some(d) = input.daeun_element {
        root.insert("daeun_element".into(), json!(d.name()));
    }
    if let Some(s) = input.saeun_element {
        root.insert("saeun_element".into(), json!(s.name()));
    }

    let mut shinsal: Vec<&str> = input.shinsal.iter().map(|s| s.name()).collect();
    shinsal.sort_unstable();
    root.insert("shinsal".into(), json!(shinsal));

    if let Some(w) = input.dominant_western_element {
        root.insert("dominant_western_element".into(), json!(w.name()));
    }

    let mut houses = Map::new();
    for (planet, house) in &input.planet_houses {
        houses.insert(planet.name().into(), json!(house.number()));
    }
    root.insert("planet_houses".into(), Value::Object(houses));

    let mut signs = Map::new();
    for (planet, sign) in &input.planet_signs {
        signs.insert(planet.name().into(), json!(sign.name()));
    }
    root.insert("planet_signs".into(), Value::Object(signs));

    let mut aspects: Vec<Value> = input
        .aspects
        .iter()
        .map(|a| {
            let mut obj = Map::new();
            obj.insert("planet1".into(), json!(a.planet1.name()));
            obj.insert("planet2".into(), json!(a.planet2.name()));
            obj.insert("kind".into(), json!(a.kind.name()));
            obj.insert("angle".into(), json!(a.angle));
            if let Some(orb) = a.orb {
                obj.insert("orb".into(), json!(orb));
            }
            Value::Object(obj)
        })
        .collect();
    sort_values(&mut aspects);
    root.insert("aspects".into(), Value::Array(aspects));

    let mut transits: Vec<Value> = input
        .active_transits
        .iter()
        .map(|t| {
            json!({
                "planet": t.planet.name(),
                "kind": t.kind.name(),
                "natal": t.natal.name(),
            })
        })
        .collect();
    sort_values(&mut transits);
    root.insert("active_transits".into(), Value::Array(transits));

    let mut asteroids = Map::new();
    for (asteroid, house) in &input.asteroid_houses {
        asteroids.insert(asteroid.name().into(), json!(house.number()));
    }
    root.insert("asteroid_houses".into(), Value::Object(asteroids));

    let mut extra = Map::new();
    for (point, sign) in &input.extra_point_signs {
        extra.insert(point.name().into(), json!(sign.name()));
    }
    root.insert("extra_point_signs".into(), Value::Object(extra));

    Value::Object(root)
}

/// Stable cache key for a matrix input: `dfm1:<sha256 hex>`.
pub fn hash_input(input: &MatrixInput) -> String {
    use std::fmt::Write;

    let canonical = canonical_value(input).to_string();
    let digest = Sha256::digest(canonical.as_bytes());
    let mut key = String::with_capacity(KEY_PREFIX.len() + 1 + 64);
    key.push_str(KEY_PREFIX);
    key.push(':');
    for byte in digest {
        let _ = write!(key, "{byte:02x}");
    }
    key
}

/// Order array members by their serialized text. Total order, so any
/// input permutation canonicalizes identically.
fn sort_values(values: &mut [Value]) {
    values.sort_by_cached_key(|v| v.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use unmyeong_types::{
        Aspect, AspectType, Element, Pillar, PillarRelation, Planet, RelationKind,
    };

    fn sample() -> MatrixInput {
        MatrixInput {
            day_master: Element::Wood,
            pillar_elements: vec![Element::Fire, Element::Water, Element::Wood],
            relations: vec![
                PillarRelation {
                    kind: RelationKind::Chung,
                    pillars: vec![Pillar::Day, Pillar::Year],
                    detail: None,
                },
                PillarRelation {
                    kind: RelationKind::Samhap,
                    pillars: vec![Pillar::Month, Pillar::Hour],
                    detail: Some("인오술".into()),
                },
            ],
            aspects: vec![
                Aspect {
                    planet1: Planet::Sun,
                    planet2: Planet::Moon,
                    kind: AspectType::Trine,
                    orb: Some(2.1),
                    angle: 120.0,
                },
                Aspect {
                    planet1: Planet::Mars,
                    planet2: Planet::Saturn,
                    kind: AspectType::Square,
                    orb: None,
                    angle: 90.0,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn permutation_of_arrays_is_invisible() {
        let a = sample();
        let mut b = sample();
        b.pillar_elements.reverse();
        b.relations.reverse();
        b.aspects.reverse();
        assert_eq!(hash_input(&a), hash_input(&b));
    }

    #[test]
    fn lang_and_context_are_invisible() {
        let a = sample();
        let mut b = sample();
        b.lang = Some("ko".into());
        b.profile_context = Some("relationship reading".into());
        assert_eq!(hash_input(&a), hash_input(&b));
    }

    #[test]
    fn semantic_change_is_visible() {
        let a = sample();

        let mut b = sample();
        b.day_master = Element::Fire;
        assert_ne!(hash_input(&a), hash_input(&b));

        let mut c = sample();
        c.aspects[0].orb = Some(2.2);
        assert_ne!(hash_input(&a), hash_input(&c));
    }

    #[test]
    fn optional_presence_is_visible() {
        let a = sample();
        let mut b = sample();
        b.yongsin = Some(Element::Water);
        assert_ne!(hash_input(&a), hash_input(&b));
    }

    #[test]
    fn key_has_fixed_form() {
        let key = hash_input(&sample());
        assert!(key.starts_with("dfm1:"));
        assert_eq!(key.len(), "dfm1:".len() + 64);
    }
}
