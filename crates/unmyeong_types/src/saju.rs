//! Saju (Four Pillars) vocabulary: sibsin, twelve life stages, shinsal
//! markers, pillar relations, and geokguk patterns.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

/// The four pillars of a Saju chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Pillar {
    Year,
    Month,
    Day,
    Hour,
}

impl Pillar {
    /// Canonical tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    /// Resolve an upstream tag.
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "year" | "연" | "년" => Some(Self::Year),
            "month" | "월" => Some(Self::Month),
            "day" | "일" => Some(Self::Day),
            "hour" | "time" | "시" => Some(Self::Hour),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Sibsin (ten relational categories)
// ---------------------------------------------------------------------------

/// The ten sibsin, in paired traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Sibsin {
    /// 비견 — peer, same element same polarity.
    Bigyeon,
    /// 겁재 — rival, same element opposite polarity.
    Geopjae,
    /// 식신 — output, generated same polarity.
    Siksin,
    /// 상관 — expression, generated opposite polarity.
    Sanggwan,
    /// 편재 — windfall wealth.
    Pyeonjae,
    /// 정재 — steady wealth.
    Jeongjae,
    /// 편관 — irregular authority.
    Pyeongwan,
    /// 정관 — proper authority.
    Jeonggwan,
    /// 편인 — unconventional resource.
    Pyeonin,
    /// 정인 — proper resource.
    Jeongin,
}

/// All ten sibsin in paired traditional order (Bigyeon=0 .. Jeongin=9).
pub const ALL_SIBSIN: [Sibsin; 10] = [
    Sibsin::Bigyeon,
    Sibsin::Geopjae,
    Sibsin::Siksin,
    Sibsin::Sanggwan,
    Sibsin::Pyeonjae,
    Sibsin::Jeongjae,
    Sibsin::Pyeongwan,
    Sibsin::Jeonggwan,
    Sibsin::Pyeonin,
    Sibsin::Jeongin,
];

/// The five sibsin groups (pairs of the ten categories).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SibsinGroup {
    /// 비겁 — self/peer (Bigyeon, Geopjae).
    Bigyeop,
    /// 식상 — output (Siksin, Sanggwan).
    Siksang,
    /// 재성 — wealth (Pyeonjae, Jeongjae).
    Jaeseong,
    /// 관성 — authority (Pyeongwan, Jeonggwan).
    Gwanseong,
    /// 인성 — resource (Pyeonin, Jeongin).
    Inseong,
}

impl Sibsin {
    /// Canonical romanized tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "bigyeon",
            Self::Geopjae => "geopjae",
            Self::Siksin => "siksin",
            Self::Sanggwan => "sanggwan",
            Self::Pyeonjae => "pyeonjae",
            Self::Jeongjae => "jeongjae",
            Self::Pyeongwan => "pyeongwan",
            Self::Jeonggwan => "jeonggwan",
            Self::Pyeonin => "pyeonin",
            Self::Jeongin => "jeongin",
        }
    }

    /// 0-based index in paired traditional order.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Group (pair) this sibsin belongs to.
    pub const fn group(self) -> SibsinGroup {
        match self {
            Self::Bigyeon | Self::Geopjae => SibsinGroup::Bigyeop,
            Self::Siksin | Self::Sanggwan => SibsinGroup::Siksang,
            Self::Pyeonjae | Self::Jeongjae => SibsinGroup::Jaeseong,
            Self::Pyeongwan | Self::Jeonggwan => SibsinGroup::Gwanseong,
            Self::Pyeonin | Self::Jeongin => SibsinGroup::Inseong,
        }
    }

    /// Resolve an upstream tag (romanized, Hangul, or Hanja).
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "bigyeon" | "비견" | "比肩" => Some(Self::Bigyeon),
            "geopjae" | "겁재" | "劫財" => Some(Self::Geopjae),
            "siksin" | "식신" | "食神" => Some(Self::Siksin),
            "sanggwan" | "상관" | "傷官" => Some(Self::Sanggwan),
            "pyeonjae" | "편재" | "偏財" => Some(Self::Pyeonjae),
            "jeongjae" | "정재" | "正財" => Some(Self::Jeongjae),
            "pyeongwan" | "편관" | "偏官" | "칠살" => Some(Self::Pyeongwan),
            "jeonggwan" | "정관" | "正官" => Some(Self::Jeonggwan),
            "pyeonin" | "편인" | "偏印" => Some(Self::Pyeonin),
            "jeongin" | "정인" | "正印" => Some(Self::Jeongin),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Twelve life stages
// ---------------------------------------------------------------------------

/// The twelve life stages (십이운성), in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TwelveStage {
    /// 장생 — birth.
    Jangsaeng,
    /// 목욕 — bathing.
    Mokyok,
    /// 관대 — coming of age.
    Gwandae,
    /// 건록 — establishment.
    Geonrok,
    /// 제왕 — peak.
    Jewang,
    /// 쇠 — decline.
    Soe,
    /// 병 — illness.
    Byeong,
    /// 사 — death.
    Sa,
    /// 묘 — tomb.
    Myo,
    /// 절 — severance.
    Jeol,
    /// 태 — conception.
    Tae,
    /// 양 — gestation.
    Yang,
}

/// All twelve stages in cycle order (Jangsaeng=0 .. Yang=11).
pub const ALL_STAGES: [TwelveStage; 12] = [
    TwelveStage::Jangsaeng,
    TwelveStage::Mokyok,
    TwelveStage::Gwandae,
    TwelveStage::Geonrok,
    TwelveStage::Jewang,
    TwelveStage::Soe,
    TwelveStage::Byeong,
    TwelveStage::Sa,
    TwelveStage::Myo,
    TwelveStage::Jeol,
    TwelveStage::Tae,
    TwelveStage::Yang,
];

impl TwelveStage {
    /// Canonical romanized tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jangsaeng => "jangsaeng",
            Self::Mokyok => "mokyok",
            Self::Gwandae => "gwandae",
            Self::Geonrok => "geonrok",
            Self::Jewang => "jewang",
            Self::Soe => "soe",
            Self::Byeong => "byeong",
            Self::Sa => "sa",
            Self::Myo => "myo",
            Self::Jeol => "jeol",
            Self::Tae => "tae",
            Self::Yang => "yang",
        }
    }

    /// 0-based cycle index.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vitality of the stage in -3..=3 (Jewang strongest, Jeol weakest).
    pub const fn vitality(self) -> i8 {
        match self {
            Self::Jangsaeng => 2,
            Self::Mokyok => -1,
            Self::Gwandae => 2,
            Self::Geonrok => 3,
            Self::Jewang => 3,
            Self::Soe => -1,
            Self::Byeong => -2,
            Self::Sa => -3,
            Self::Myo => -2,
            Self::Jeol => -3,
            Self::Tae => 1,
            Self::Yang => 1,
        }
    }

    /// Resolve an upstream tag (romanized, Hangul, or Hanja).
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "jangsaeng" | "장생" | "長生" => Some(Self::Jangsaeng),
            "mokyok" | "목욕" | "沐浴" => Some(Self::Mokyok),
            "gwandae" | "관대" | "冠帶" => Some(Self::Gwandae),
            "geonrok" | "건록" | "建祿" => Some(Self::Geonrok),
            "jewang" | "제왕" | "帝旺" => Some(Self::Jewang),
            "soe" | "쇠" | "衰" => Some(Self::Soe),
            "byeong" | "병" | "病" => Some(Self::Byeong),
            "sa" | "사" | "死" => Some(Self::Sa),
            "myo" | "묘" | "墓" => Some(Self::Myo),
            "jeol" | "절" | "絶" => Some(Self::Jeol),
            "tae" | "태" | "胎" => Some(Self::Tae),
            "yang" | "양" | "養" => Some(Self::Yang),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Shinsal
// ---------------------------------------------------------------------------

/// Recognized shinsal markers. Upstream lists may carry other regional
/// names; unrecognized ones are dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Shinsal {
    /// 천을귀인 — foremost auspicious helper star.
    Cheoneul,
    /// 태극귀인 — auspicious foundation star.
    Taegeuk,
    /// 문창귀인 — scholarship star.
    Munchang,
    /// 도화 — peach blossom, charm and attraction.
    Dohwa,
    /// 역마 — movement and travel.
    Yeokma,
    /// 화개 — canopy, solitude and art.
    Hwagae,
    /// 양인 — blade, sharp drive.
    Yangin,
    /// 백호 — white tiger, accident-prone.
    Baekho,
    /// 괴강 — overpowering; extreme swings.
    Goegang,
    /// 귀문 — ghost gate, obsession.
    Gwimun,
    /// 원진 — resentment pairing.
    Wonjin,
    /// 홍염 — red charm.
    Hongyeom,
}

/// All recognized shinsal.
pub const ALL_SHINSAL: [Shinsal; 12] = [
    Shinsal::Cheoneul,
    Shinsal::Taegeuk,
    Shinsal::Munchang,
    Shinsal::Dohwa,
    Shinsal::Yeokma,
    Shinsal::Hwagae,
    Shinsal::Yangin,
    Shinsal::Baekho,
    Shinsal::Goegang,
    Shinsal::Gwimun,
    Shinsal::Wonjin,
    Shinsal::Hongyeom,
];

impl Shinsal {
    /// Canonical romanized tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cheoneul => "cheoneul",
            Self::Taegeuk => "taegeuk",
            Self::Munchang => "munchang",
            Self::Dohwa => "dohwa",
            Self::Yeokma => "yeokma",
            Self::Hwagae => "hwagae",
            Self::Yangin => "yangin",
            Self::Baekho => "baekho",
            Self::Goegang => "goegang",
            Self::Gwimun => "gwimun",
            Self::Wonjin => "wonjin",
            Self::Hongyeom => "hongyeom",
        }
    }

    /// Whether the marker is traditionally auspicious.
    pub const fn is_auspicious(self) -> bool {
        matches!(
            self,
            Self::Cheoneul | Self::Taegeuk | Self::Munchang | Self::Dohwa | Self::Hongyeom
        )
    }

    /// Resolve an upstream tag (romanized, Hangul, or Hanja).
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "cheoneul" | "천을귀인" | "천을" | "天乙貴人" => Some(Self::Cheoneul),
            "taegeuk" | "태극귀인" | "태극" | "太極貴人" => Some(Self::Taegeuk),
            "munchang" | "문창귀인" | "문창" | "文昌貴人" => Some(Self::Munchang),
            "dohwa" | "도화" | "桃花" => Some(Self::Dohwa),
            "yeokma" | "역마" | "驛馬" => Some(Self::Yeokma),
            "hwagae" | "화개" | "華蓋" => Some(Self::Hwagae),
            "yangin" | "양인" | "羊刃" => Some(Self::Yangin),
            "baekho" | "백호" | "白虎" => Some(Self::Baekho),
            "goegang" | "괴강" | "魁罡" => Some(Self::Goegang),
            "gwimun" | "귀문" | "鬼門" => Some(Self::Gwimun),
            "wonjin" | "원진" | "怨嗔" => Some(Self::Wonjin),
            "hongyeom" | "홍염" | "紅艶" => Some(Self::Hongyeom),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Pillar relations
// ---------------------------------------------------------------------------

/// Kinds of stem-branch relations between pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RelationKind {
    /// 육합 — six-harmony pairing.
    Yukhap,
    /// 삼합 — three-harmony formation.
    Samhap,
    /// 방합 — directional combination.
    Banghap,
    /// 충 — clash.
    Chung,
    /// 형 — punishment.
    Hyeong,
    /// 파 — destruction.
    Pa,
    /// 해 — harm.
    Hae,
}

impl RelationKind {
    /// Canonical romanized tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yukhap => "yukhap",
            Self::Samhap => "samhap",
            Self::Banghap => "banghap",
            Self::Chung => "chung",
            Self::Hyeong => "hyeong",
            Self::Pa => "pa",
            Self::Hae => "hae",
        }
    }

    /// Harmonic tone in -3..=3; combinations positive, conflicts negative.
    pub const fn tone(self) -> i8 {
        match self {
            Self::Samhap => 3,
            Self::Yukhap => 2,
            Self::Banghap => 1,
            Self::Chung => -3,
            Self::Hyeong => -2,
            Self::Pa => -1,
            Self::Hae => -1,
        }
    }

    /// Resolve an upstream tag (romanized, Hangul, or Hanja).
    pub fn from_name(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "yukhap" | "육합" | "六合" | "hap" | "합" => Some(Self::Yukhap),
            "samhap" | "삼합" | "三合" => Some(Self::Samhap),
            "banghap" | "방합" | "方合" => Some(Self::Banghap),
            "chung" | "충" | "沖" | "clash" => Some(Self::Chung),
            "hyeong" | "형" | "刑" | "punishment" => Some(Self::Hyeong),
            "pa" | "파" | "破" => Some(Self::Pa),
            "hae" | "해" | "害" => Some(Self::Hae),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Geokguk
// ---------------------------------------------------------------------------

/// The ten classical geokguk (structural patterns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Geokguk {
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
    Geonrok,
    Yangin,
}

/// All ten geokguk patterns.
pub const ALL_GEOKGUK: [Geokguk; 10] = [
    Geokguk::Siksin,
    Geokguk::Sanggwan,
    Geokguk::Pyeonjae,
    Geokguk::Jeongjae,
    Geokguk::Pyeongwan,
    Geokguk::Jeonggwan,
    Geokguk::Pyeonin,
    Geokguk::Jeongin,
    Geokguk::Geonrok,
    Geokguk::Yangin,
];

impl Geokguk {
    /// Canonical romanized tag, used in cell keys and the cache hash form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Siksin => "siksin-gyeok",
            Self::Sanggwan => "sanggwan-gyeok",
            Self::Pyeonjae => "pyeonjae-gyeok",
            Self::Jeongjae => "jeongjae-gyeok",
            Self::Pyeongwan => "pyeongwan-gyeok",
            Self::Jeonggwan => "jeonggwan-gyeok",
            Self::Pyeonin => "pyeonin-gyeok",
            Self::Jeongin => "jeongin-gyeok",
            Self::Geonrok => "geonrok-gyeok",
            Self::Yangin => "yangin-gyeok",
        }
    }

    /// The sibsin whose dominance defines the pattern, where one does
    /// (Geonrok and Yangin are stem-strength patterns instead).
    pub const fn core_sibsin(self) -> Option<Sibsin> {
        match self {
            Self::Siksin => Some(Sibsin::Siksin),
            Self::Sanggwan => Some(Sibsin::Sanggwan),
            Self::Pyeonjae => Some(Sibsin::Pyeonjae),
            Self::Jeongjae => Some(Sibsin::Jeongjae),
            Self::Pyeongwan => Some(Sibsin::Pyeongwan),
            Self::Jeonggwan => Some(Sibsin::Jeonggwan),
            Self::Pyeonin => Some(Sibsin::Pyeonin),
            Self::Jeongin => Some(Sibsin::Jeongin),
            Self::Geonrok | Self::Yangin => None,
        }
    }

    /// Resolve an upstream tag. The `-gyeok` suffix is optional.
    pub fn from_name(tag: &str) -> Option<Self> {
        let t = tag.trim().to_lowercase();
        let t = t
            .strip_suffix("-gyeok")
            .or_else(|| t.strip_suffix("gyeok"))
            .or_else(|| t.strip_suffix("격"))
            .unwrap_or(&t);
        match t {
            "siksin" | "식신" => Some(Self::Siksin),
            "sanggwan" | "상관" => Some(Self::Sanggwan),
            "pyeonjae" | "편재" => Some(Self::Pyeonjae),
            "jeongjae" | "정재" => Some(Self::Jeongjae),
            "pyeongwan" | "편관" => Some(Self::Pyeongwan),
            "jeonggwan" | "정관" => Some(Self::Jeonggwan),
            "pyeonin" | "편인" => Some(Self::Pyeonin),
            "jeongin" | "정인" => Some(Self::Jeongin),
            "geonrok" | "건록" => Some(Self::Geonrok),
            "yangin" | "양인" => Some(Self::Yangin),
            _ => None,
        }
    }
}
