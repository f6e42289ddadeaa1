//! Wall-clock to UTC conversion and Julian Day derivation.
//!
//! A birth record carries local wall-clock fields, but the zone offset
//! that separates those fields from UTC is itself a function of the
//! instant (DST). [`to_utc`] resolves the circularity by fixed-point
//! iteration: guess the instant, look up the offset at the guess,
//! re-derive the instant from the offset, three times. Away from a DST
//! transition the first correction already lands on the fixed point;
//! inside a transition's skipped or ambiguous window the result may be
//! off by the DST delta, which is accepted.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono::{DateTime, Offset};
use chrono_tz::{OffsetName, Tz};

use crate::error::TimeError;

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Number of fixed-point iterations in [`to_utc`].
const OFFSET_ITERATIONS: u32 = 3;

/// An absolute birth instant with its derived Julian Day.
///
/// Computed fresh per chart request and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedBirth {
    /// The absolute instant in UTC.
    pub utc: DateTime<Utc>,
    /// Continuous astronomical day count for the same instant.
    pub julian_day: f64,
}

fn resolve_zone(timezone: &str) -> Result<Tz, TimeError> {
    timezone
        .parse()
        .map_err(|_| TimeError::UnknownTimezone(timezone.to_string()))
}

/// Convert local wall-clock birth fields in an IANA zone to UTC.
///
/// A missing time means local midnight. An unknown zone identifier is
/// an error, never silently treated as UTC.
pub fn to_utc(
    date: NaiveDate,
    time: Option<NaiveTime>,
    timezone: &str,
) -> Result<DateTime<Utc>, TimeError> {
    let tz = resolve_zone(timezone)?;
    let wall = date.and_time(time.unwrap_or(NaiveTime::MIN));

    // Start from the UTC-identity guess and correct by the zone offset
    // a fixed number of times; convergence is not checked.
    let mut guess = wall;
    for _ in 0..OFFSET_ITERATIONS {
        let offset_seconds = tz
            .offset_from_utc_datetime(&guess)
            .fix()
            .local_minus_utc();
        guess = wall - Duration::seconds(i64::from(offset_seconds));
    }
    Ok(Utc.from_utc_datetime(&guess))
}

/// Julian Day for a UTC instant.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + utc.timestamp_millis() as f64 / 86_400_000.0
}

/// Normalize a birth record into its absolute instant and Julian Day.
pub fn normalize_birth(
    date: NaiveDate,
    time: Option<NaiveTime>,
    timezone: &str,
) -> Result<NormalizedBirth, TimeError> {
    let utc = to_utc(date, time, timezone)?;
    Ok(NormalizedBirth {
        utc,
        julian_day: julian_day(utc),
    })
}

/// Render a birth record for display: Japanese-locale date, the time or
/// an explicit time-unknown marker, and the zone abbreviation at the
/// resolved instant.
///
/// Examples: `1990年1月15日 10:30 (JST)` and
/// `1990年1月15日 (時刻不明) (JST)`. Zones without an alphabetic
/// abbreviation render their fixed offset instead (e.g. `+09:00`).
pub fn format_birth_date_time(
    date: NaiveDate,
    time: Option<NaiveTime>,
    timezone: &str,
) -> Result<String, TimeError> {
    let tz = resolve_zone(timezone)?;
    let utc = to_utc(date, time, timezone)?;

    let offset = tz.offset_from_utc_datetime(&utc.naive_utc());
    let zone = match offset.abbreviation() {
        Some(abbr) => abbr.to_string(),
        None => offset.fix().to_string(),
    };

    let rendered = match time {
        Some(t) => format!(
            "{}年{}月{}日 {} ({zone})",
            date.year(),
            date.month(),
            date.day(),
            t.format("%H:%M"),
        ),
        None => format!(
            "{}年{}月{}日 (時刻不明) ({zone})",
            date.year(),
            date.month(),
            date.day(),
        ),
    };
    Ok(rendered)
}
