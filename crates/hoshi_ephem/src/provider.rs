//! The ephemeris capability trait and its record types.

use serde::{Deserialize, Serialize};

use crate::body::{Body, HouseSystem};
use crate::error::EphemerisError;

/// Calculation-mode flags, bitwise-ORed into a request.
///
/// The values mirror the Swiss-style flag constants so a real provider
/// can pass them straight through.
pub mod flags {
    /// Use the provider's main ephemeris data.
    pub const MAIN_EPHEMERIS: u32 = 1;
    /// Also compute the body's daily speed.
    pub const SPEED: u32 = 256;
}

/// Raw provider output for one body at one Julian Day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in astronomical units.
    pub distance: f64,
    /// Daily motion in degrees per day (zero unless SPEED was requested
    /// and the provider computed it).
    pub speed: f64,
}

impl BodyPosition {
    /// Position with only a longitude; latitude, distance, and speed
    /// are zeroed. Enough for sign mapping and aspect work.
    pub const fn from_longitude(longitude: f64) -> Self {
        Self {
            longitude,
            latitude: 0.0,
            distance: 0.0,
            speed: 0.0,
        }
    }
}

/// House-system angles for one Julian Day and location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseAngles {
    /// Ecliptic longitude of the ascendant in degrees.
    pub ascendant: f64,
    /// Ecliptic longitude of the midheaven in degrees.
    pub midheaven: f64,
    /// The twelve house cusp longitudes in degrees.
    pub cusps: [f64; 12],
}

/// The ephemeris capability the chart builders consume.
///
/// Implementations are synchronous and may block; they carry no retry
/// logic of their own. The chart builders treat any error as fatal to
/// the request. Implementors should be `Send + Sync` so a single
/// provider can serve concurrent chart computations.
pub trait EphemerisProvider {
    /// Ecliptic position (and optionally speed) of a body at a Julian
    /// Day (UT).
    fn calc_position(&self, jd: f64, body: Body, flags: u32)
        -> Result<BodyPosition, EphemerisError>;

    /// House angles at a Julian Day (UT) for a geographic location.
    fn calc_houses(
        &self,
        jd: f64,
        latitude: f64,
        longitude: f64,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError>;
}
