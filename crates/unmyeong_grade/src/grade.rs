//! Grade derivation from a timing score and contextual signals.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Day quality tier, 0 best to 4 worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Grade {
    Best = 0,
    Good = 1,
    Normal = 2,
    Bad = 3,
    Worst = 4,
}

impl Grade {
    /// Numeric tier (0-4).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Create from a numeric tier.
    pub const fn from_number(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Best),
            1 => Some(Self::Good),
            2 => Some(Self::Normal),
            3 => Some(Self::Bad),
            4 => Some(Self::Worst),
            _ => None,
        }
    }

    /// Canonical tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Good => "good",
            Self::Normal => "normal",
            Self::Bad => "bad",
            Self::Worst => "worst",
        }
    }
}

/// Signals consumed by the grading engine for one (date, profile) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeInput {
    /// Raw timing score, nominally 0-100.
    pub score: f64,
    /// The date is a birthday-resonant special day.
    pub is_birthday_special: bool,
    /// Both traditions were checked against each other.
    pub cross_verified: bool,
    /// The Saju side reads positive.
    pub saju_positive: bool,
    /// The Western side reads positive.
    pub astro_positive: bool,
    /// Strength points counted across the fused chart.
    pub total_strength_count: u32,
    /// Bad markers counted on the Saju side.
    pub saju_bad_count: u32,
    /// A pillar clash (chung) is active.
    pub has_chung: bool,
    /// A pillar punishment (hyeong) is active.
    pub has_xing: bool,
    /// No major planet is retrograde.
    pub has_no_major_retrograde: bool,
    /// Number of retrograde planets.
    pub retrograde_count: u32,
    /// Bad markers counted across both sides.
    pub total_bad_count: u32,
}

/// Grading outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    /// The tier from the score thresholds (with the conflict override).
    pub grade: Grade,
    /// Net capped adjustment in `PENALTY_CAP..=BONUS_CAP`.
    pub grade_bonus: i8,
    /// `score + grade_bonus`, reported for display only.
    pub adjusted_score: f64,
}

/// Base tier from the score thresholds.
///
/// A best-bracket score with an active conflict signal (chung or
/// hyeong) is force-set to `Grade::Good`: conflict overrides a high raw
/// score for the top tier, and the demotion lands on tier 1 rather than
/// re-entering the bracket walk.
fn base_grade(input: &GradeInput) -> Grade {
    let score = input.score;
    if score.is_nan() {
        // Fail toward caution, not false positivity.
        return Grade::Worst;
    }
    if score >= BEST_MIN {
        if input.has_chung || input.has_xing {
            return Grade::Good;
        }
        return Grade::Best;
    }
    if score >= GOOD_MIN {
        Grade::Good
    } else if score >= NORMAL_MIN {
        Grade::Normal
    } else if score >= BAD_MIN {
        Grade::Bad
    } else {
        Grade::Worst
    }
}

/// Summed bonus side, capped at `BONUS_CAP`.
fn bonus_sum(input: &GradeInput) -> i8 {
    let mut bonus = 0i8;
    if input.is_birthday_special {
        bonus += BONUS_BIRTHDAY;
    }
    if input.cross_verified && input.saju_positive && input.astro_positive {
        bonus += BONUS_CROSS_VERIFIED;
    }
    if input.total_strength_count >= STRENGTH_COUNT_MIN && input.saju_bad_count == 0 {
        bonus += BONUS_STRENGTH;
    }
    bonus.min(BONUS_CAP)
}

/// Summed penalty side, capped at `PENALTY_CAP`.
fn penalty_sum(input: &GradeInput) -> i8 {
    let mut penalty = 0i8;
    if input.has_chung && input.has_xing {
        penalty += PENALTY_BOTH_CONFLICTS;
    } else if input.has_chung || input.has_xing {
        penalty += PENALTY_ONE_CONFLICT;
    }
    if input.total_bad_count >= BAD_COUNT_MIN {
        penalty += PENALTY_BAD_COUNT;
    }
    if !input.has_no_major_retrograde && input.retrograde_count >= RETROGRADE_COUNT_MIN {
        penalty += PENALTY_RETROGRADE;
    }
    penalty.max(PENALTY_CAP)
}

/// Grade one day.
///
/// The returned `grade` comes from the thresholds alone (plus the
/// conflict override); `grade_bonus` and `adjusted_score` are reported
/// alongside for display and are never fed back into a second grading
/// pass.
pub fn calculate_grade(input: &GradeInput) -> GradeResult {
    let grade = base_grade(input);
    let grade_bonus = (bonus_sum(input) + penalty_sum(input)).clamp(PENALTY_CAP, BONUS_CAP);
    GradeResult {
        grade,
        grade_bonus,
        adjusted_score: input.score + f64::from(grade_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: f64) -> GradeInput {
        GradeInput {
            score,
            has_no_major_retrograde: true,
            ..Default::default()
        }
    }

    #[test]
    fn thresholds_match_contract() {
        assert_eq!(calculate_grade(&scored(BEST_MIN)).grade, Grade::Best);
        assert_eq!(calculate_grade(&scored(GOOD_MIN)).grade, Grade::Good);
        assert_eq!(calculate_grade(&scored(NORMAL_MIN)).grade, Grade::Normal);
        assert_eq!(calculate_grade(&scored(BAD_MIN)).grade, Grade::Bad);
        assert_eq!(calculate_grade(&scored(BAD_MIN - 0.1)).grade, Grade::Worst);
    }

    #[test]
    fn grade_monotone_in_score() {
        let scores = [80.0, 71.9, 64.9, 44.9, 29.9];
        let grades: Vec<u8> = scores
            .iter()
            .map(|&s| calculate_grade(&scored(s)).grade.number())
            .collect();
        assert!(grades.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn conflict_overrides_best() {
        let mut input = scored(80.0);
        input.has_chung = true;
        assert_eq!(calculate_grade(&input).grade, Grade::Good);

        let mut input = scored(73.0);
        input.has_chung = true;
        assert_eq!(calculate_grade(&input).grade, Grade::Good);

        let mut input = scored(75.0);
        input.has_xing = true;
        assert_ne!(calculate_grade(&input).grade, Grade::Best);
    }

    #[test]
    fn example_best_day() {
        let result = calculate_grade(&scored(75.0));
        assert_eq!(result.grade, Grade::Best);
        assert_eq!(result.grade_bonus, 0);
        assert_eq!(result.adjusted_score, 75.0);
    }

    #[test]
    fn bonus_caps_at_plus_four() {
        let input = GradeInput {
            score: 50.0,
            is_birthday_special: true,
            cross_verified: true,
            saju_positive: true,
            astro_positive: true,
            total_strength_count: 5,
            saju_bad_count: 0,
            has_no_major_retrograde: true,
            ..Default::default()
        };
        let result = calculate_grade(&input);
        // Raw +5 capped to BONUS_CAP.
        assert_eq!(result.grade_bonus, BONUS_CAP);
        assert_eq!(result.adjusted_score, 54.0);
    }

    #[test]
    fn penalty_caps_at_minus_six() {
        let input = GradeInput {
            score: 50.0,
            has_chung: true,
            has_xing: true,
            total_bad_count: 5,
            has_no_major_retrograde: false,
            retrograde_count: 3,
            ..Default::default()
        };
        let result = calculate_grade(&input);
        // Raw -9 capped to PENALTY_CAP.
        assert_eq!(result.grade_bonus, PENALTY_CAP);
        assert_eq!(result.adjusted_score, 44.0);
        assert_eq!(result.grade, Grade::Normal);
    }

    #[test]
    fn bonus_and_penalty_net_out() {
        let input = GradeInput {
            score: 50.0,
            is_birthday_special: true,
            has_chung: true,
            has_no_major_retrograde: true,
            ..Default::default()
        };
        // +2 birthday, -2 single conflict.
        assert_eq!(calculate_grade(&input).grade_bonus, 0);
    }

    #[test]
    fn nan_fails_safe() {
        let result = calculate_grade(&scored(f64::NAN));
        assert_eq!(result.grade, Grade::Worst);
    }
}
