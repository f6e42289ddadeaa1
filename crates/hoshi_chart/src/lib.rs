//! Chart calculation over the ephemeris capability.
//!
//! Two builders orchestrate the leaf crates:
//!
//! - [`calc_western_chart`]: the full tropical reading — ten planet
//!   positions with signs, the sun/moon signs, an optional Placidus
//!   ascendant, and the detected aspect set.
//! - [`calc_vedic_chart`]: the sidereal reading — Sun and Moon rashis,
//!   the Moon's nakshatra, and an optional ascendant rashi.
//!
//! Both treat an unknown birth time as local noon (the generic
//! normalizer in `hoshi_time` uses midnight; the chart builders prefer
//! noon because it halves the worst-case longitude error over an
//! unknown day). Both fail atomically: a provider error for any body
//! aborts the whole reading.
//!
//! [`detect_aspects`] is also usable standalone over any planet set.

pub mod aspect;
pub mod error;
pub mod types;
mod util;
pub mod vedic;
pub mod western;

pub use aspect::{
    angular_separation, classify_separation, detect_aspects, AspectDef, ASPECT_DEFINITIONS,
};
pub use error::ChartError;
pub use types::{Aspect, AspectType, BirthInput, PlanetPosition, VedicReading, WesternReading};
pub use vedic::calc_vedic_chart;
pub use western::calc_western_chart;
