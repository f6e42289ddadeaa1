//! Input and reading types for chart calculation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use hoshi_ephem::Body;
use hoshi_zodiac::{Nakshatra, Rashi, Sign};

/// A birth record as the chart builders consume it.
///
/// Time and coordinates are independently optional. An ascendant is
/// only computed when the time and both coordinates are present; a
/// single coordinate without its partner is a validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Calendar birth date.
    pub date: NaiveDate,
    /// Birth time, if known.
    pub time: Option<NaiveTime>,
    /// IANA timezone identifier, e.g. `Asia/Tokyo`.
    pub timezone: String,
    /// Geographic latitude in decimal degrees, if known.
    pub latitude: Option<f64>,
    /// Geographic longitude in decimal degrees, if known.
    pub longitude: Option<f64>,
}

impl BirthInput {
    /// Birth record with only a date and timezone.
    pub fn new(date: NaiveDate, timezone: impl Into<String>) -> Self {
        Self {
            date,
            time: None,
            timezone: timezone.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Attach a known birth time.
    pub fn with_time(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Attach birth coordinates.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }
}

/// One body's resolved place in the tropical chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// The body.
    pub body: Body,
    /// Ecliptic longitude, normalized to [0, 360) and reported at
    /// six-decimal precision.
    pub longitude: f64,
    /// Ecliptic latitude in degrees.
    pub latitude: f64,
    /// Distance in astronomical units.
    pub distance: f64,
    /// Daily motion in degrees per day.
    pub speed: f64,
    /// The tropical sign containing the longitude.
    pub sign: Sign,
    /// Whole degrees into the sign (floored, 0-29; never rounds up
    /// into the next sign).
    pub degree: u8,
}

/// The kind of angular relationship between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectType {
    /// Lowercase name as it appears in serialized readings.
    pub const fn name(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Opposition => "opposition",
            AspectType::Trine => "trine",
            AspectType::Square => "square",
            AspectType::Sextile => "sextile",
        }
    }
}

impl std::fmt::Display for AspectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An angular relationship between an unordered pair of bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// First body of the pair (earlier in chart order).
    pub planet1: Body,
    /// Second body of the pair.
    pub planet2: Body,
    /// The matched aspect type.
    #[serde(rename = "type")]
    pub aspect: AspectType,
    /// Absolute deviation from the exact angle, in degrees, at
    /// two-decimal precision.
    pub orb: f64,
}

/// A tropical (Western) chart reading.
///
/// Serializes with camelCase keys (`sunSign`, `moonSign`) to match the
/// consuming product's document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WesternReading {
    /// Sign of the Sun.
    pub sun_sign: Sign,
    /// Sign of the Moon.
    pub moon_sign: Sign,
    /// Rising sign; present only when birth time and coordinates were
    /// both supplied.
    pub ascendant: Option<Sign>,
    /// All ten bodies in provider-id order.
    pub planets: Vec<PlanetPosition>,
    /// Detected aspects over the planet set.
    pub aspects: Vec<Aspect>,
}

/// A sidereal (Vedic) chart reading.
///
/// Covers the Sun and Moon only; the nakshatra is derived from the
/// sidereal Moon. Serializes with camelCase keys (`sunRashi`,
/// `moonNakshatra`) like [`WesternReading`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VedicReading {
    /// Rashi of the sidereal Sun.
    pub sun_rashi: Rashi,
    /// Whole degrees into the Sun's rashi (floored).
    pub sun_degree: u8,
    /// Rashi of the sidereal Moon.
    pub moon_rashi: Rashi,
    /// Whole degrees into the Moon's rashi (floored).
    pub moon_degree: u8,
    /// Nakshatra of the sidereal Moon.
    pub moon_nakshatra: Nakshatra,
    /// Rising rashi; present only when birth time and coordinates were
    /// both supplied.
    pub ascendant_rashi: Option<Rashi>,
}
