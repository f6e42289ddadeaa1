//! Convenience wrapper for the hoshi astrology core.
//!
//! Re-exports the public vocabulary of the workspace crates and offers
//! one-shot helpers for the common calls, so callers only need
//! `use hoshi_rs::*`.
//!
//! # Quick start
//!
//! ```rust
//! use hoshi_rs::*;
//!
//! let provider = StaticEphemeris::from_longitudes(&[
//!     (Body::Sun, 294.5),
//!     (Body::Moon, 100.0),
//! ]);
//! let input = birth_input("1990-01-15", Some("10:30"), "Asia/Tokyo", None, None).unwrap();
//! let reading = vedic_chart(&provider, &input).unwrap();
//! println!("moon nakshatra: {}", reading.moon_nakshatra);
//!
//! let pair = compatibility("INTJ", "ENFP").unwrap();
//! println!("score: {} ({})", pair.score, pair.summary);
//! ```

pub mod convenience;

pub use convenience::{
    birth_input, compatibility, normalize_birth, vedic_chart, western_chart,
};

// Re-export the workspace vocabulary so callers don't need to depend
// on the leaf crates directly.
pub use hoshi_chart::{
    calc_vedic_chart, calc_western_chart, detect_aspects, Aspect, AspectType, BirthInput,
    ChartError, PlanetPosition, VedicReading, WesternReading, ASPECT_DEFINITIONS,
};
pub use hoshi_ephem::{
    flags, Body, BodyPosition, EphemerisError, EphemerisProvider, HouseAngles, HouseSystem,
    StaticEphemeris, ALL_BODIES,
};
pub use hoshi_mbti::{AxisScores, Band, Compatibility, MbtiError, MbtiType, ALL_TYPES};
pub use hoshi_time::{
    format_birth_date_time, julian_day, parse_birth_date, parse_birth_time, to_utc,
    NormalizedBirth, TimeError,
};
pub use hoshi_zodiac::{
    lahiri_ayanamsha, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    rashi_from_tropical, sidereal_from_tropical, sign_from_longitude, Nakshatra, Rashi, Sign,
    ALL_NAKSHATRAS, ALL_RASHIS, ALL_SIGNS,
};
