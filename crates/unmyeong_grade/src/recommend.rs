//! Per-grade recommendation tables and warning filtering.

use serde::Serialize;

use crate::grade::Grade;

/// Activities a grade can recommend. `key()` values are the stable
/// identifiers the rendering layer translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    MajorDecision,
    Wedding,
    Contract,
    BigDecision,
    Travel,
    Investment,
    Rest,
    Meditation,
    Reflection,
    AvoidBigDecisions,
}

impl Recommendation {
    /// Stable identifier.
    pub const fn key(self) -> &'static str {
        match self {
            Self::MajorDecision => "majorDecision",
            Self::Wedding => "wedding",
            Self::Contract => "contract",
            Self::BigDecision => "bigDecision",
            Self::Travel => "travel",
            Self::Investment => "investment",
            Self::Rest => "rest",
            Self::Meditation => "meditation",
            Self::Reflection => "reflection",
            Self::AvoidBigDecisions => "avoidBigDecisions",
        }
    }
}

/// Grade 0: everything is favored.
const BEST_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation::MajorDecision,
    Recommendation::Wedding,
    Recommendation::Contract,
    Recommendation::BigDecision,
    Recommendation::Travel,
    Recommendation::Investment,
];

/// Grade 1: the best-day list minus wedding.
const GOOD_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation::MajorDecision,
    Recommendation::Contract,
    Recommendation::BigDecision,
    Recommendation::Travel,
    Recommendation::Investment,
];

/// Grades 3 and 4: recovery-oriented.
const BAD_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation::Rest,
    Recommendation::Meditation,
    Recommendation::Reflection,
];

const WORST_RECOMMENDATIONS: &[Recommendation] = &[
    Recommendation::Rest,
    Recommendation::Meditation,
    Recommendation::Reflection,
    Recommendation::AvoidBigDecisions,
];

/// Recommendations for a grade. Grade 2 recommends nothing either way.
pub fn grade_recommendations(grade: Grade) -> &'static [Recommendation] {
    match grade {
        Grade::Best => BEST_RECOMMENDATIONS,
        Grade::Good => GOOD_RECOMMENDATIONS,
        Grade::Normal => &[],
        Grade::Bad => BAD_RECOMMENDATIONS,
        Grade::Worst => WORST_RECOMMENDATIONS,
    }
}

/// Static rendering keys for a grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradeKeys {
    /// Canonical tag (`"best"` .. `"worst"`).
    pub name: &'static str,
    /// Translation key for the tier label.
    pub label: &'static str,
    /// Translation key for the one-line tier summary.
    pub summary: &'static str,
}

/// Rendering keys for a grade.
pub const fn grade_keys(grade: Grade) -> GradeKeys {
    match grade {
        Grade::Best => GradeKeys {
            name: "best",
            label: "grade.best.label",
            summary: "grade.best.summary",
        },
        Grade::Good => GradeKeys {
            name: "good",
            label: "grade.good.label",
            summary: "grade.good.summary",
        },
        Grade::Normal => GradeKeys {
            name: "normal",
            label: "grade.normal.label",
            summary: "grade.normal.summary",
        },
        Grade::Bad => GradeKeys {
            name: "bad",
            label: "grade.bad.label",
            summary: "grade.bad.summary",
        },
        Grade::Worst => GradeKeys {
            name: "worst",
            label: "grade.worst.label",
            summary: "grade.worst.summary",
        },
    }
}

/// Warnings force-included on a worst day, ahead of upstream ones.
const WORST_BASE_WARNINGS: &[&str] = &["extremeCaution", "health"];

/// Generic warning guaranteed on a bad day with no upstream warnings.
const GENERIC_CAUTION: &str = "caution";

/// Substrings that mark a warning as severe for grade-2 filtering.
const SEVERE_MARKS: &[&str] = &["extreme", "conflict"];

fn is_severe(warning: &str) -> bool {
    let lower = warning.to_lowercase();
    SEVERE_MARKS.iter().any(|mark| lower.contains(mark))
}

/// Filter upstream warnings to what a day of this grade should show.
///
/// Grades 0-1 show none; grade 2 drops severe ones; grade 3 guarantees
/// at least a generic caution; grade 4 force-includes a base set merged
/// with the upstream warnings, deduplicated by exact string equality.
pub fn filter_warnings_by_grade(grade: Grade, warnings: &[String]) -> Vec<String> {
    match grade {
        Grade::Best | Grade::Good => Vec::new(),
        Grade::Normal => warnings
            .iter()
            .filter(|w| !is_severe(w))
            .cloned()
            .collect(),
        Grade::Bad => {
            if warnings.is_empty() {
                vec![GENERIC_CAUTION.to_owned()]
            } else {
                warnings.to_vec()
            }
        }
        Grade::Worst => {
            let mut merged: Vec<String> =
                WORST_BASE_WARNINGS.iter().map(|w| (*w).to_owned()).collect();
            for warning in warnings {
                if !merged.contains(warning) {
                    merged.push(warning.clone());
                }
            }
            merged
        }
    }
}
