//! Error types for the ephemeris boundary.

use thiserror::Error;

use crate::body::Body;

/// Errors surfaced by an [`EphemerisProvider`](crate::EphemerisProvider).
///
/// A provider failure fails the whole chart computation; callers never
/// retry, substitute a default position, or drop the body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The provider returned a failure status for a body position.
    #[error("position calculation failed for {body} (status {status})")]
    Calculation { body: Body, status: i32 },
    /// The provider returned a failure status for a house computation.
    #[error("house calculation failed (status {status})")]
    Houses { status: i32 },
    /// The provider has no data for the requested body.
    #[error("no ephemeris data for {0}")]
    UnsupportedBody(Body),
}
