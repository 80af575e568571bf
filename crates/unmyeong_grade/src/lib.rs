//! Day-grading engine.
//!
//! Converts a numeric timing score plus contextual signals into a
//! discrete quality tier (grade 0 "best" .. grade 4 "worst"), with
//! capped bonus/penalty adjustment, per-grade recommendation tables,
//! and grade-appropriate warning filtering.
//!
//! Independent of the fusion matrix: the score consumed here is derived
//! upstream (partly from matrix signals), and grading itself is a cheap
//! pure function computed per calendar day, never cached.

pub mod consts;
pub mod grade;
pub mod recommend;

pub use grade::{Grade, GradeInput, GradeResult, calculate_grade};
pub use recommend::{
    GradeKeys, Recommendation, filter_warnings_by_grade, grade_keys, grade_recommendations,
};
