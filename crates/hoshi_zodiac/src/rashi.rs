//! Sidereal zodiac signs (rashis).
//!
//! The sidereal zodiac also divides the ecliptic into twelve equal
//! segments, but measures longitude against the fixed stars. A tropical
//! longitude must have the ayanamsha subtracted before it can be mapped
//! to a rashi; [`rashi_from_tropical`] does both steps.

use serde::{Deserialize, Serialize};

use crate::ayanamsha::lahiri_ayanamsha;
use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The twelve rashis in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All rashis in ecliptic order, indexable by rashi number (0 = Mesha).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi in common transliteration.
    pub const fn name(&self) -> &'static str {
        match self {
            Rashi::Mesha => "Mesha",
            Rashi::Vrishabha => "Vrishabha",
            Rashi::Mithuna => "Mithuna",
            Rashi::Karka => "Karka",
            Rashi::Simha => "Simha",
            Rashi::Kanya => "Kanya",
            Rashi::Tula => "Tula",
            Rashi::Vrischika => "Vrischika",
            Rashi::Dhanu => "Dhanu",
            Rashi::Makara => "Makara",
            Rashi::Kumbha => "Kumbha",
            Rashi::Meena => "Meena",
        }
    }

    /// Zero-based index of the rashi (0 = Mesha, 11 = Meena).
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// All twelve rashis in ecliptic order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A sidereal longitude resolved to its rashi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    /// The rashi containing the longitude.
    pub rashi: Rashi,
    /// Zero-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees into the rashi, in [0, 30).
    pub degrees_in_rashi: f64,
}

/// Map a sidereal ecliptic longitude (degrees) to its rashi.
///
/// The longitude must already be sidereal; use [`rashi_from_tropical`]
/// to apply the ayanamsha first.
pub fn rashi_from_longitude(sidereal_longitude_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_longitude_deg);
    let idx = ((lon / RASHI_SPAN_DEG) as usize).min(11);
    RashiInfo {
        rashi: ALL_RASHIS[idx],
        rashi_index: idx as u8,
        degrees_in_rashi: lon - (idx as f64) * RASHI_SPAN_DEG,
    }
}

/// Map a tropical ecliptic longitude to its rashi at the given instant.
///
/// Subtracts the Lahiri ayanamsha for `jd_ut` and resolves the result.
pub fn rashi_from_tropical(tropical_longitude_deg: f64, jd_ut: f64) -> RashiInfo {
    let sidereal = normalize_360(tropical_longitude_deg - lahiri_ayanamsha(jd_ut));
    rashi_from_longitude(sidereal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rashi_boundaries() {
        assert_eq!(rashi_from_longitude(0.0).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
    }

    #[test]
    fn degrees_in_rashi_is_remainder() {
        let info = rashi_from_longitude(276.5);
        assert_eq!(info.rashi, Rashi::Makara);
        assert_eq!(info.rashi_index, 9);
        assert!((info.degrees_in_rashi - 6.5).abs() < 1e-9);
    }

    #[test]
    fn tropical_mapping_subtracts_ayanamsha() {
        // Ayanamsha at J2000 is roughly 23.86 deg, so a tropical
        // longitude of 20 deg lands late in Meena, not in Mesha.
        let info = rashi_from_tropical(20.0, 2_451_545.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!(info.degrees_in_rashi > 25.0);
    }

    #[test]
    fn indices_match_order() {
        for (i, rashi) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(rashi.index(), i);
        }
    }
}
