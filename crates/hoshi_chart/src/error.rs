//! Error type for chart calculation.

use thiserror::Error;

use hoshi_ephem::EphemerisError;
use hoshi_time::TimeError;

/// Errors from building a chart.
///
/// Any error aborts the whole computation; no partial reading is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Birth-record validation or timezone resolution failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// The ephemeris provider failed for a requested body or house.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// One coordinate was supplied without the other.
    #[error("latitude and longitude must be supplied together")]
    MissingCoordinates,
}
