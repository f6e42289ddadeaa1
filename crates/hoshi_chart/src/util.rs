//! Shared helpers for the two chart builders.

use chrono::NaiveTime;

use crate::error::ChartError;
use crate::types::BirthInput;

/// The noon default both chart builders substitute for an unknown
/// birth time, minimizing the worst-case longitude error over the day.
pub(crate) const NOON: NaiveTime = match NaiveTime::from_hms_opt(12, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Round a longitude to the six-decimal precision readings report.
pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}

/// Both coordinates, or neither. One without the other is an error.
pub(crate) fn effective_location(input: &BirthInput) -> Result<Option<(f64, f64)>, ChartError> {
    match (input.latitude, input.longitude) {
        (Some(lat), Some(lon)) => Ok(Some((lat, lon))),
        (None, None) => Ok(None),
        _ => Err(ChartError::MissingCoordinates),
    }
}
