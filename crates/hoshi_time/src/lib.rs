//! Birth-record time normalization.
//!
//! This crate turns an imprecise human-entered birth record into the
//! precise inputs the chart builders need:
//!
//! - [`parse_birth_date`] / [`parse_birth_time`]: strict validation of
//!   the `YYYY-MM-DD` and `HH:MM` field shapes, including a calendar
//!   round-trip so `1990-02-30` cannot slip through as March 2.
//! - [`to_utc`]: local wall clock in an IANA zone to an absolute UTC
//!   instant, resolving the DST circularity by fixed-point iteration.
//! - [`julian_day`] / [`normalize_birth`]: the continuous day count the
//!   ephemeris consumes, bundled with the instant in
//!   [`NormalizedBirth`].
//! - [`format_birth_date_time`]: the timezone-annotated display string.
//!
//! A missing birth time is a first-class state here and defaults to
//! local midnight. The chart builders substitute their own noon default
//! before calling in; see `hoshi_chart`.

pub mod convert;
pub mod error;
pub mod parse;

pub use convert::{
    format_birth_date_time, julian_day, normalize_birth, to_utc, NormalizedBirth, UNIX_EPOCH_JD,
};
pub use error::TimeError;
pub use parse::{parse_birth_date, parse_birth_time};
