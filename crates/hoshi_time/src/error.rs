//! Error types for birth-record normalization.

use thiserror::Error;

/// Errors from parsing a birth record or resolving its timezone.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string does not match the strict `YYYY-MM-DD` shape.
    #[error("invalid birth date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),
    /// Date string is well-formed but names a day that does not exist.
    #[error("invalid calendar date: {0:?}")]
    InvalidDate(String),
    /// Time string does not match the strict zero-padded 24-hour `HH:MM` shape.
    #[error("invalid birth time format: {0:?} (expected HH:MM, 24-hour)")]
    InvalidTimeFormat(String),
    /// The IANA timezone identifier is not in the zone database.
    #[error("unknown timezone identifier: {0:?}")]
    UnknownTimezone(String),
}
