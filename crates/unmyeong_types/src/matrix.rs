//! Computed fusion-matrix types.
//!
//! A `FusionMatrix` holds ten layers of scored interaction cells plus a
//! weighted summary. It is created once per unique input, never mutated,
//! and shared behind `Arc` by the cache.

use std::collections::BTreeMap;

use serde::Serialize;

/// Number of fusion layers.
pub const LAYER_COUNT: usize = 10;

/// Interaction strength ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum InteractionLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl InteractionLevel {
    /// Ordinal rank (Low=0 .. Critical=3).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Display tag.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Level implied by an absolute score.
    pub fn from_abs_score(abs: f64) -> Self {
        if abs >= 18.0 {
            Self::Critical
        } else if abs >= 12.0 {
            Self::High
        } else if abs >= 6.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One scored interaction between two domain tags.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Interaction strength.
    pub level: InteractionLevel,
    /// Signed score contribution.
    pub score: f64,
    /// Optional fixed annotation for the rendering layer.
    pub detail: Option<&'static str>,
}

impl Cell {
    /// Cell with the level implied by the score magnitude.
    pub fn scored(score: f64) -> Self {
        Self {
            level: InteractionLevel::from_abs_score(score.abs()),
            score,
            detail: None,
        }
    }

    /// Cell with an annotation.
    pub fn annotated(score: f64, detail: &'static str) -> Self {
        Self {
            detail: Some(detail),
            ..Self::scored(score)
        }
    }
}

/// One layer: composite cell key → cell. Keys are
/// `"<left-tag>-<right-tag>"` over canonical tags, so iteration order
/// (and serialization) is deterministic.
pub type Layer = BTreeMap<String, Cell>;

/// A cell lifted into the summary with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPoint {
    /// 1-based layer number.
    pub layer: u8,
    /// Composite cell key.
    pub key: String,
    /// Signed score of the cell.
    pub score: f64,
    /// Interaction strength of the cell.
    pub level: InteractionLevel,
}

/// Weighted reduction of all layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSummary {
    /// Display score in 0..=100.
    pub total_score: f64,
    /// Cells with strongly positive contributions.
    pub strength_points: Vec<SummaryPoint>,
    /// Near-neutral cells.
    pub balance_points: Vec<SummaryPoint>,
    /// Cells with strongly negative contributions.
    pub caution_points: Vec<SummaryPoint>,
    /// Top cells by absolute score across all layers.
    pub top_synergies: Vec<SummaryPoint>,
}

/// The computed ten-layer fusion matrix.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionMatrix {
    /// Layers 1-10, indexed 0-9.
    pub layers: [Layer; LAYER_COUNT],
    /// Weighted summary across all layers.
    pub summary: MatrixSummary,
}

impl FusionMatrix {
    /// Total number of cells across all layers.
    pub fn cell_count(&self) -> usize {
        self.layers.iter().map(BTreeMap::len).sum()
    }
}
