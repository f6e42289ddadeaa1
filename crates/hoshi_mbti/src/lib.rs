//! MBTI compatibility scoring.
//!
//! A pure sibling of the chart stack: [`compatibility`] takes two
//! [`MbtiType`] values and returns a [`Compatibility`] — the base score
//! from a literal 16x16 table, four axis sub-scores derived from
//! per-letter agreement, and a qualitative [`Band`].
//!
//! The table is embedded constant data; nothing here touches an
//! ephemeris, a clock, or any shared state.

mod matrix;
pub mod score;
pub mod types;

pub use score::{compatibility, AxisScores, Band, Compatibility};
pub use types::{MbtiError, MbtiType, ALL_TYPES};
