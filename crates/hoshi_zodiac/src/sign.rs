//! Tropical zodiac signs.
//!
//! The tropical zodiac divides the ecliptic into twelve equal 30 degree
//! segments measured from the vernal equinox. Tropical longitudes map
//! directly onto signs with no ayanamsha correction.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Width of one sign in degrees.
pub const SIGN_SPAN_DEG: f64 = 30.0;

/// The twelve tropical zodiac signs in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in ecliptic order, indexable by sign number (0 = Aries).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(&self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Zero-based index of the sign (0 = Aries, 11 = Pisces).
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All twelve signs in ecliptic order.
    pub const fn all() -> &'static [Sign; 12] {
        &ALL_SIGNS
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A tropical longitude resolved to its sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignInfo {
    /// The sign containing the longitude.
    pub sign: Sign,
    /// Zero-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Degrees into the sign, in [0, 30).
    pub degrees_in_sign: f64,
}

/// Map a tropical ecliptic longitude (degrees) to its zodiac sign.
///
/// The longitude is normalized to [0, 360) first, so any finite input
/// is accepted.
pub fn sign_from_longitude(tropical_longitude_deg: f64) -> SignInfo {
    let lon = normalize_360(tropical_longitude_deg);
    // lon < 360 guarantees idx <= 11; min() guards the 360.0-epsilon edge.
    let idx = ((lon / SIGN_SPAN_DEG) as usize).min(11);
    SignInfo {
        sign: ALL_SIGNS[idx],
        sign_index: idx as u8,
        degrees_in_sign: lon - (idx as f64) * SIGN_SPAN_DEG,
    }
}
