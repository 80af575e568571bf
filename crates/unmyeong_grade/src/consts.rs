//! Grading thresholds and adjustment caps.
//!
//! Single source of truth for the grading contract; tests assert
//! against these names, not literals.

/// Minimum score for grade 0 ("best").
pub const BEST_MIN: f64 = 72.0;
/// Minimum score for grade 1 ("good").
pub const GOOD_MIN: f64 = 65.0;
/// Minimum score for grade 2 ("normal").
pub const NORMAL_MIN: f64 = 45.0;
/// Minimum score for grade 3 ("bad"); below this is grade 4 ("worst").
pub const BAD_MIN: f64 = 30.0;

/// Upper cap on the summed bonus side.
pub const BONUS_CAP: i8 = 4;
/// Lower cap on the summed penalty side (and on the final adjustment).
pub const PENALTY_CAP: i8 = -6;

/// Bonus when the date is a birthday-special day.
pub const BONUS_BIRTHDAY: i8 = 2;
/// Bonus when both traditions independently verify a positive day.
pub const BONUS_CROSS_VERIFIED: i8 = 2;
/// Bonus for a strong, clean chart signal.
pub const BONUS_STRENGTH: i8 = 1;
/// Strength-point count required for `BONUS_STRENGTH`.
pub const STRENGTH_COUNT_MIN: u32 = 5;

/// Penalty when both chung and hyeong are present.
pub const PENALTY_BOTH_CONFLICTS: i8 = -4;
/// Penalty when exactly one of chung/hyeong is present.
pub const PENALTY_ONE_CONFLICT: i8 = -2;
/// Penalty for an accumulation of bad markers.
pub const PENALTY_BAD_COUNT: i8 = -3;
/// Bad-marker count required for `PENALTY_BAD_COUNT`.
pub const BAD_COUNT_MIN: u32 = 3;
/// Penalty for heavy retrograde weather.
pub const PENALTY_RETROGRADE: i8 = -2;
/// Retrograde count required for `PENALTY_RETROGRADE`.
pub const RETROGRADE_COUNT_MIN: u32 = 2;
