//! One-shot helpers over the workspace crates.
//!
//! These accept raw field strings where the caller has them (date,
//! time, MBTI codes) and plumb them through parsing, normalization, and
//! the chart builders. No logic of their own beyond argument plumbing.

use hoshi_chart::{
    calc_vedic_chart, calc_western_chart, BirthInput, ChartError, VedicReading, WesternReading,
};
use hoshi_ephem::EphemerisProvider;
use hoshi_mbti::{Compatibility, MbtiError, MbtiType};
use hoshi_time::{parse_birth_date, parse_birth_time, NormalizedBirth, TimeError};

/// Parse raw birth fields and normalize them to UTC and a Julian Day.
///
/// A missing time means local midnight here, matching `hoshi_time`.
pub fn normalize_birth(
    birth_date: &str,
    birth_time: Option<&str>,
    timezone: &str,
) -> Result<NormalizedBirth, TimeError> {
    let date = parse_birth_date(birth_date)?;
    let time = parse_birth_time(birth_time)?;
    hoshi_time::normalize_birth(date, time, timezone)
}

/// Parse raw birth fields into a [`BirthInput`].
pub fn birth_input(
    birth_date: &str,
    birth_time: Option<&str>,
    timezone: &str,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<BirthInput, TimeError> {
    let mut input = BirthInput::new(parse_birth_date(birth_date)?, timezone);
    input.time = parse_birth_time(birth_time)?;
    input.latitude = latitude;
    input.longitude = longitude;
    Ok(input)
}

/// Build a tropical chart reading.
pub fn western_chart(
    provider: &impl EphemerisProvider,
    input: &BirthInput,
) -> Result<WesternReading, ChartError> {
    calc_western_chart(provider, input)
}

/// Build a sidereal chart reading.
pub fn vedic_chart(
    provider: &impl EphemerisProvider,
    input: &BirthInput,
) -> Result<VedicReading, ChartError> {
    calc_vedic_chart(provider, input)
}

/// Score two MBTI codes given as strings.
pub fn compatibility(type_a: &str, type_b: &str) -> Result<Compatibility, MbtiError> {
    let a: MbtiType = type_a.parse()?;
    let b: MbtiType = type_b.parse()?;
    Ok(hoshi_mbti::compatibility(a, b))
}
