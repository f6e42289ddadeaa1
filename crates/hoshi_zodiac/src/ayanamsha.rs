//! Lahiri ayanamsha.
//!
//! The ayanamsha is the accumulated angular offset between the tropical
//! and sidereal zodiacs, caused by the precession of the equinoxes.
//! This module evaluates a quadratic fit to the Lahiri (Chitrapaksha)
//! ayanamsha in Julian centuries from the 1900 reference epoch. The fit
//! is good to well under an arcminute across the twentieth and
//! twenty-first centuries, which is ample for sign-level work.

use crate::util::normalize_360;

/// Julian Day of the reference epoch 1900 January 0.5.
pub const REFERENCE_EPOCH_JD: f64 = 2_415_020.5;

/// Days per Julian century in the Gregorian sense used by the fit.
pub const GREGORIAN_CENTURY_DAYS: f64 = 36_524.25;

/// Centuries elapsed since the 1900 reference epoch.
#[inline]
pub fn centuries_since_epoch(jd_ut: f64) -> f64 {
    (jd_ut - REFERENCE_EPOCH_JD) / GREGORIAN_CENTURY_DAYS
}

/// Lahiri ayanamsha in degrees at the given Julian Day (UT).
///
/// Quadratic in centuries since 1900:
/// `22.46047 + 1.396042 t + 0.000308 t^2`.
pub fn lahiri_ayanamsha(jd_ut: f64) -> f64 {
    let t = centuries_since_epoch(jd_ut);
    22.46047 + 1.396042 * t + 0.000308 * t * t
}

/// Convert a tropical longitude to sidereal at the given instant.
///
/// Subtracts the Lahiri ayanamsha for `jd_ut` and normalizes the result
/// to [0, 360).
pub fn sidereal_from_tropical(tropical_longitude_deg: f64, jd_ut: f64) -> f64 {
    normalize_360(tropical_longitude_deg - lahiri_ayanamsha(jd_ut))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ayanamsha_at_reference_epoch() {
        assert!((lahiri_ayanamsha(REFERENCE_EPOCH_JD) - 22.46047).abs() < 1e-9);
    }

    #[test]
    fn ayanamsha_at_j2000() {
        // J2000.0 sits very close to one century after the epoch.
        let aya = lahiri_ayanamsha(2_451_545.0);
        assert!(aya > 23.0 && aya < 24.0, "got {aya}");
        assert!((aya - 23.8568).abs() < 1e-3);
    }

    #[test]
    fn ayanamsha_grows_monotonically() {
        let a = lahiri_ayanamsha(2_447_906.5625);
        let b = lahiri_ayanamsha(2_451_545.0);
        let c = lahiri_ayanamsha(2_460_000.0);
        assert!(a < b && b < c);
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        // Tropical 10 deg minus ~23.86 deg wraps to the top of the circle.
        let sid = sidereal_from_tropical(10.0, 2_451_545.0);
        assert!(sid > 340.0 && sid < 350.0);
    }
}
