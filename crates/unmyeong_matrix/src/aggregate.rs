//! Reduction of the ten layers into the matrix summary.

use unmyeong_types::{LAYER_COUNT, Layer, MatrixSummary, SummaryPoint};

/// Cells scoring at or above this are strength points.
pub const STRENGTH_THRESHOLD: f64 = 8.0;
/// Cells scoring at or below this are caution points.
pub const CAUTION_THRESHOLD: f64 = -8.0;
/// Number of top synergies reported.
pub const TOP_SYNERGY_COUNT: usize = 5;

/// Neutral midpoint of the display score.
const BASE_DISPLAY_SCORE: f64 = 50.0;
/// Raw-sum points per display point.
const DISPLAY_SCALE: f64 = 4.0;

/// Reduce the layers into partitioned points, top synergies, and the
/// 0-100 display score.
///
/// Ordering is fully deterministic: within each partition and in the
/// synergy ranking, ties on |score| break toward the lower layer
/// number, then the lexicographically smaller cell key.
pub fn summarize(layers: &[Layer; LAYER_COUNT]) -> MatrixSummary {
    let mut points: Vec<SummaryPoint> = Vec::new();
    for (index, layer) in layers.iter().enumerate() {
        for (key, cell) in layer {
            points.push(SummaryPoint {
                layer: (index + 1) as u8,
                key: key.clone(),
                score: cell.score,
                level: cell.level,
            });
        }
    }

    let raw_total: f64 = points.iter().map(|p| p.score).sum();
    let total_score = (BASE_DISPLAY_SCORE + raw_total / DISPLAY_SCALE).clamp(0.0, 100.0);

    let mut ranked = points.clone();
    ranked.sort_by(|a, b| {
        b.score
            .abs()
            .total_cmp(&a.score.abs())
            .then_with(|| a.layer.cmp(&b.layer))
            .then_with(|| a.key.cmp(&b.key))
    });
    let top_synergies: Vec<SummaryPoint> = ranked.into_iter().take(TOP_SYNERGY_COUNT).collect();

    let mut strength_points = Vec::new();
    let mut balance_points = Vec::new();
    let mut caution_points = Vec::new();
    for point in points {
        if point.score >= STRENGTH_THRESHOLD {
            strength_points.push(point);
        } else if point.score <= CAUTION_THRESHOLD {
            caution_points.push(point);
        } else {
            balance_points.push(point);
        }
    }
    strength_points.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.layer.cmp(&b.layer))
            .then_with(|| a.key.cmp(&b.key))
    });
    caution_points.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| a.layer.cmp(&b.layer))
            .then_with(|| a.key.cmp(&b.key))
    });
    // Balance points keep layer-then-key order from the walk above.

    MatrixSummary {
        total_score,
        strength_points,
        balance_points,
        caution_points,
        top_synergies,
    }
}
