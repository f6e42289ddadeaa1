//! Small angle helpers shared by the zodiac mappers.

/// Normalize an angle in degrees to the range [0, 360).
///
/// Handles arbitrarily negative inputs, which show up after subtracting
/// an ayanamsha from a small tropical longitude.
#[inline]
pub fn normalize_360(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
