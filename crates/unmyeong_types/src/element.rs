//! Five-phase (ohaeng) and four-element vocabularies, and the bridge
//! between them.
//!
//! The Eastern side uses the five phases Wood/Fire/Earth/Metal/Water
//! with the generating (sangsaeng) and overcoming (sanggeuk) cycles.
//! The Western side uses the four classical elements Fire/Earth/Air/
//! Water. Cross-tradition layers score pairs through a fixed affinity
//! table rather than through either cycle alone.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Five phases (Eastern)
// ---------------------------------------------------------------------------

/// The five phases, in generating-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five phases in generating-cycle order (Wood=0 .. Water=4).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

/// Relation of one phase to another within the five-phase cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FivePhaseRelation {
    /// Same phase.
    Same,
    /// `self` generates `other` (sangsaeng, forward cycle).
    Generates,
    /// `self` is generated by `other`.
    GeneratedBy,
    /// `self` overcomes `other` (sanggeuk).
    Overcomes,
    /// `self` is overcome by `other`.
    OvercomeBy,
}

impl Element {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    /// 0-based index in generating-cycle order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Create from a 0-based cycle index.
    pub const fn from_index(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Wood),
            1 => Some(Self::Fire),
            2 => Some(Self::Earth),
            3 => Some(Self::Metal),
            4 => Some(Self::Water),
            _ => None,
        }
    }

    /// Resolve an upstream tag. Accepts English, romanized Korean,
    /// Hangul, and Hanja spellings; anything else is `None`.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "wood" | "mok" | "목" | "木" | "tree" => Some(Self::Wood),
            "fire" | "hwa" | "화" | "火" => Some(Self::Fire),
            "earth" | "to" | "토" | "土" | "soil" => Some(Self::Earth),
            "metal" | "geum" | "금" | "金" | "gold" => Some(Self::Metal),
            "water" | "su" | "수" | "水" => Some(Self::Water),
            _ => None,
        }
    }

    /// The phase this one generates (Wood→Fire→Earth→Metal→Water→Wood).
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The phase this one overcomes (Wood→Earth→Water→Fire→Metal→Wood).
    pub const fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Position of `other` relative to `self` in the two cycles.
    pub fn relation_to(self, other: Self) -> FivePhaseRelation {
        if self == other {
            FivePhaseRelation::Same
        } else if self.generates() == other {
            FivePhaseRelation::Generates
        } else if other.generates() == self {
            FivePhaseRelation::GeneratedBy
        } else if self.overcomes() == other {
            FivePhaseRelation::Overcomes
        } else {
            FivePhaseRelation::OvercomeBy
        }
    }
}

// ---------------------------------------------------------------------------
// Four elements (Western)
// ---------------------------------------------------------------------------

/// The four classical elements of Western astrology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum WesternElement {
    Fire,
    Earth,
    Air,
    Water,
}

/// All four Western elements in triplicity order (Fire=0 .. Water=3).
pub const ALL_WESTERN_ELEMENTS: [WesternElement; 4] = [
    WesternElement::Fire,
    WesternElement::Earth,
    WesternElement::Air,
    WesternElement::Water,
];

impl WesternElement {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Air => "air",
            Self::Water => "water",
        }
    }

    /// 0-based triplicity index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Fire => 0,
            Self::Earth => 1,
            Self::Air => 2,
            Self::Water => 3,
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "fire" => Some(Self::Fire),
            "earth" => Some(Self::Earth),
            "air" => Some(Self::Air),
            "water" => Some(Self::Water),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// East-West bridge
// ---------------------------------------------------------------------------

/// Affinity of each phase (row) with each Western element (column),
/// in -3..=3. Rows follow `ALL_ELEMENTS`, columns `ALL_WESTERN_ELEMENTS`.
///
/// Like-natured pairs (fire/fire, earth/earth, water/water) carry the
/// strongest affinity; Metal pairs with Air (both associated with the
/// mental/communicative temperament); oppositions of nature (fire/water)
/// carry the strongest friction.
const EW_AFFINITY: [[i8; 4]; 5] = [
    //           Fire Earth  Air Water
    /* Wood  */ [1, -1, 2, 2],
    /* Fire  */ [3, 1, 2, -3],
    /* Earth */ [1, 3, -2, -1],
    /* Metal */ [-2, 2, 3, 1],
    /* Water */ [-3, -1, 1, 3],
];

/// Affinity in -3..=3 between a phase and a Western element.
pub fn east_west_affinity(east: Element, west: WesternElement) -> i8 {
    EW_AFFINITY[east.index() as usize][west.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn overcoming_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.overcomes();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn relation_is_exhaustive() {
        // Any ordered pair falls in exactly one of the five relations.
        for a in ALL_ELEMENTS {
            for b in ALL_ELEMENTS {
                let r = a.relation_to(b);
                match r {
                    FivePhaseRelation::Same => assert_eq!(a, b),
                    FivePhaseRelation::Generates => assert_eq!(a.generates(), b),
                    FivePhaseRelation::GeneratedBy => assert_eq!(b.generates(), a),
                    FivePhaseRelation::Overcomes => assert_eq!(a.overcomes(), b),
                    FivePhaseRelation::OvercomeBy => assert_eq!(b.overcomes(), a),
                }
            }
        }
    }

    #[test]
    fn alias_resolution() {
        assert_eq!(Element::from_name("목"), Some(Element::Wood));
        assert_eq!(Element::from_name("金"), Some(Element::Metal));
        assert_eq!(Element::from_name(" Fire "), Some(Element::Fire));
        assert_eq!(Element::from_name("aether"), None);
        assert_eq!(WesternElement::from_name("Air"), Some(WesternElement::Air));
        assert_eq!(WesternElement::from_name("wind"), None);
    }

    #[test]
    fn affinity_symmetric_peaks() {
        assert_eq!(east_west_affinity(Element::Fire, WesternElement::Fire), 3);
        assert_eq!(east_west_affinity(Element::Water, WesternElement::Water), 3);
        assert_eq!(east_west_affinity(Element::Fire, WesternElement::Water), -3);
    }
}
