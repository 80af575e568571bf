//! Western natal-chart vocabulary: signs, planets, aspects, asteroids,
//! extra points, and houses.

use serde::{Deserialize, Serialize};

use crate::element::WesternElement;

// ---------------------------------------------------------------------------
// Zodiac signs
// ---------------------------------------------------------------------------

/// The 12 zodiac signs, in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in ecliptic order (Aries=0 .. Pisces=11).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "aries",
            Self::Taurus => "taurus",
            Self::Gemini => "gemini",
            Self::Cancer => "cancer",
            Self::Leo => "leo",
            Self::Virgo => "virgo",
            Self::Libra => "libra",
            Self::Scorpio => "scorpio",
            Self::Sagittarius => "sagittarius",
            Self::Capricorn => "capricorn",
            Self::Aquarius => "aquarius",
            Self::Pisces => "pisces",
        }
    }

    /// 0-based ecliptic index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Triplicity element of the sign.
    pub const fn element(self) -> WesternElement {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => WesternElement::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => WesternElement::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => WesternElement::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => WesternElement::Water,
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "aries" => Some(Self::Aries),
            "taurus" => Some(Self::Taurus),
            "gemini" => Some(Self::Gemini),
            "cancer" => Some(Self::Cancer),
            "leo" => Some(Self::Leo),
            "virgo" => Some(Self::Virgo),
            "libra" => Some(Self::Libra),
            "scorpio" => Some(Self::Scorpio),
            "sagittarius" => Some(Self::Sagittarius),
            "capricorn" => Some(Self::Capricorn),
            "aquarius" => Some(Self::Aquarius),
            "pisces" => Some(Self::Pisces),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

/// The 10 planets of the natal chart (luminaries included).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 10 planets in Chaldean-extended order (Sun=0 .. Pluto=9).
pub const ALL_PLANETS: [Planet; 10] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
    Planet::Pluto,
];

impl Planet {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        }
    }

    /// 0-based index (Sun=0 .. Pluto=9).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// True for the slow-moving planets whose retrogrades carry the
    /// most weight in timing analysis.
    pub const fn is_outer(self) -> bool {
        matches!(
            self,
            Self::Jupiter | Self::Saturn | Self::Uranus | Self::Neptune | Self::Pluto
        )
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "sun" => Some(Self::Sun),
            "moon" => Some(Self::Moon),
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            "mars" => Some(Self::Mars),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "uranus" => Some(Self::Uranus),
            "neptune" => Some(Self::Neptune),
            "pluto" => Some(Self::Pluto),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Aspects
// ---------------------------------------------------------------------------

/// The fixed set of recognized aspect types. Aspects of any other type
/// are discarded during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AspectType {
    Conjunction,
    SemiSextile,
    Sextile,
    Quintile,
    Square,
    Trine,
    BiQuintile,
    Quincunx,
    Opposition,
}

/// All recognized aspect types, ordered by exact angle.
pub const ALL_ASPECT_TYPES: [AspectType; 9] = [
    AspectType::Conjunction,
    AspectType::SemiSextile,
    AspectType::Sextile,
    AspectType::Quintile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::BiQuintile,
    AspectType::Quincunx,
    AspectType::Opposition,
];

impl AspectType {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::SemiSextile => "semisextile",
            Self::Sextile => "sextile",
            Self::Quintile => "quintile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::BiQuintile => "biquintile",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }

    /// Exact angle of the aspect in degrees.
    pub const fn exact_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::SemiSextile => 30.0,
            Self::Sextile => 60.0,
            Self::Quintile => 72.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::BiQuintile => 144.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Harmonic tone: +1 soft, -1 hard, 0 neutral (conjunction takes
    /// the nature of the planets involved).
    pub const fn tone(self) -> i8 {
        match self {
            Self::Trine | Self::Sextile | Self::SemiSextile | Self::Quintile | Self::BiQuintile => {
                1
            }
            Self::Square | Self::Opposition | Self::Quincunx => -1,
            Self::Conjunction => 0,
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "conjunction" | "conjunct" => Some(Self::Conjunction),
            "semisextile" => Some(Self::SemiSextile),
            "sextile" => Some(Self::Sextile),
            "quintile" => Some(Self::Quintile),
            "square" => Some(Self::Square),
            "trine" => Some(Self::Trine),
            "biquintile" => Some(Self::BiQuintile),
            "quincunx" | "inconjunct" => Some(Self::Quincunx),
            "opposition" | "opposite" => Some(Self::Opposition),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Asteroids and extra points
// ---------------------------------------------------------------------------

/// The 5 asteroids tracked by the fusion layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Asteroid {
    Ceres,
    Pallas,
    Juno,
    Vesta,
    Chiron,
}

/// All tracked asteroids (Ceres=0 .. Chiron=4).
pub const ALL_ASTEROIDS: [Asteroid; 5] = [
    Asteroid::Ceres,
    Asteroid::Pallas,
    Asteroid::Juno,
    Asteroid::Vesta,
    Asteroid::Chiron,
];

impl Asteroid {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ceres => "ceres",
            Self::Pallas => "pallas",
            Self::Juno => "juno",
            Self::Vesta => "vesta",
            Self::Chiron => "chiron",
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "ceres" => Some(Self::Ceres),
            "pallas" => Some(Self::Pallas),
            "juno" => Some(Self::Juno),
            "vesta" => Some(Self::Vesta),
            "chiron" => Some(Self::Chiron),
            _ => None,
        }
    }
}

/// Calculated chart points that are not bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ExtraPoint {
    NorthNode,
    SouthNode,
    Lilith,
    PartOfFortune,
    Vertex,
}

/// All tracked extra points.
pub const ALL_EXTRA_POINTS: [ExtraPoint; 5] = [
    ExtraPoint::NorthNode,
    ExtraPoint::SouthNode,
    ExtraPoint::Lilith,
    ExtraPoint::PartOfFortune,
    ExtraPoint::Vertex,
];

impl ExtraPoint {
    /// Canonical tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NorthNode => "northnode",
            Self::SouthNode => "southnode",
            Self::Lilith => "lilith",
            Self::PartOfFortune => "partoffortune",
            Self::Vertex => "vertex",
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "northnode" | "rahu" | "truenode" | "meannode" => Some(Self::NorthNode),
            "southnode" | "ketu" => Some(Self::SouthNode),
            "lilith" | "blackmoonlilith" => Some(Self::Lilith),
            "partoffortune" | "fortuna" | "pof" => Some(Self::PartOfFortune),
            "vertex" => Some(Self::Vertex),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Houses
// ---------------------------------------------------------------------------

/// A natal house, 1-12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct House(u8);

/// Quality of a house by its position relative to the angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseClass {
    /// Houses 1, 4, 7, 10 — strongest expression.
    Angular,
    /// Houses 2, 5, 8, 11.
    Succedent,
    /// Houses 3, 6, 9, 12 — weakest expression.
    Cadent,
}

impl House {
    /// Create from a 1-based house number; `None` outside 1..=12.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= 12 { Some(Self(n)) } else { None }
    }

    /// 1-based house number.
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Angularity class of the house.
    pub const fn class(self) -> HouseClass {
        match self.0 % 3 {
            1 => HouseClass::Angular,
            2 => HouseClass::Succedent,
            _ => HouseClass::Cadent,
        }
    }
}

impl HouseClass {
    /// Strength multiplier applied to house-keyed scores.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Angular => 1.5,
            Self::Succedent => 1.0,
            Self::Cadent => 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_elements_cover_triplicities() {
        let fire: Vec<_> = ALL_SIGNS
            .iter()
            .filter(|s| s.element() == WesternElement::Fire)
            .collect();
        assert_eq!(
            fire,
            [&ZodiacSign::Aries, &ZodiacSign::Leo, &ZodiacSign::Sagittarius]
        );
    }

    #[test]
    fn aspect_angles_match_convention() {
        assert_eq!(AspectType::Conjunction.exact_angle(), 0.0);
        assert_eq!(AspectType::Quincunx.exact_angle(), 150.0);
        assert_eq!(AspectType::BiQuintile.exact_angle(), 144.0);
        assert_eq!(AspectType::from_name("semi-sextile"), Some(AspectType::SemiSextile));
        assert_eq!(AspectType::from_name("inconjunct"), Some(AspectType::Quincunx));
        assert_eq!(AspectType::from_name("septile"), None);
    }

    #[test]
    fn house_bounds() {
        assert!(House::new(0).is_none());
        assert!(House::new(13).is_none());
        assert_eq!(House::new(10).map(House::class), Some(HouseClass::Angular));
        assert_eq!(House::new(11).map(House::class), Some(HouseClass::Succedent));
        assert_eq!(House::new(12).map(House::class), Some(HouseClass::Cadent));
    }

    #[test]
    fn planet_aliases() {
        assert_eq!(Planet::from_name("Sun"), Some(Planet::Sun));
        assert_eq!(Planet::from_name("earth"), None);
        assert!(Planet::Saturn.is_outer());
        assert!(!Planet::Mars.is_outer());
    }
}
