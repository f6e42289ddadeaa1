//! The twenty-seven nakshatras (lunar mansions).
//!
//! Nakshatras divide the sidereal ecliptic into 27 equal segments of
//! 13 degrees 20 minutes each. Like rashis they are sidereal, so a
//! tropical longitude needs the ayanamsha subtracted first.

use serde::{Deserialize, Serialize};

use crate::ayanamsha::lahiri_ayanamsha;
use crate::util::normalize_360;

/// Width of one nakshatra in degrees (13 deg 20 min).
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// The twenty-seven nakshatras in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All nakshatras in ecliptic order, indexable by nakshatra number
/// (0 = Ashwini).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra in common transliteration.
    pub const fn name(&self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishtha => "Dhanishtha",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Zero-based index of the nakshatra (0 = Ashwini, 26 = Revati).
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All twenty-seven nakshatras in ecliptic order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sidereal longitude resolved to its nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// The nakshatra containing the longitude.
    pub nakshatra: Nakshatra,
    /// Zero-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Degrees into the nakshatra, in [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Map a sidereal ecliptic longitude (degrees) to its nakshatra.
pub fn nakshatra_from_longitude(sidereal_longitude_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_longitude_deg);
    let idx = ((lon / NAKSHATRA_SPAN_DEG) as usize).min(26);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx],
        nakshatra_index: idx as u8,
        degrees_in_nakshatra: lon - (idx as f64) * NAKSHATRA_SPAN_DEG,
    }
}

/// Map a tropical ecliptic longitude to its nakshatra at the given
/// instant.
///
/// Subtracts the Lahiri ayanamsha for `jd_ut` and resolves the result.
pub fn nakshatra_from_tropical(tropical_longitude_deg: f64, jd_ut: f64) -> NakshatraInfo {
    let sidereal = normalize_360(tropical_longitude_deg - lahiri_ayanamsha(jd_ut));
    nakshatra_from_longitude(sidereal)
}
