//! Strict parsing of birth date and birth time strings.
//!
//! The accepted shapes are deliberately rigid: `YYYY-MM-DD` and
//! zero-padded 24-hour `HH:MM`. Anything looser (single-digit hours,
//! trailing text, alternative separators) is rejected so that bad form
//! input fails loudly instead of being reinterpreted.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::TimeError;

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a strict `YYYY-MM-DD` birth date.
///
/// The shape check alone is not enough: `1990-02-30` is shaped
/// correctly but names no real day. After splitting the fields the
/// calendar date is constructed and its fields compared back against
/// the input, which catches both impossible dates and any silent
/// rollover a calendar library might perform.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, TimeError> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(TimeError::InvalidDateFormat(input.to_string()));
    }
    let (year_s, month_s, day_s) = (&input[0..4], &input[5..7], &input[8..10]);
    if !all_ascii_digits(year_s) || !all_ascii_digits(month_s) || !all_ascii_digits(day_s) {
        return Err(TimeError::InvalidDateFormat(input.to_string()));
    }

    let year: i32 = year_s
        .parse()
        .map_err(|_| TimeError::InvalidDateFormat(input.to_string()))?;
    let month: u32 = month_s
        .parse()
        .map_err(|_| TimeError::InvalidDateFormat(input.to_string()))?;
    let day: u32 = day_s
        .parse()
        .map_err(|_| TimeError::InvalidDateFormat(input.to_string()))?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| TimeError::InvalidDate(input.to_string()))?;
    // Round-trip check: constructed fields must match the input exactly.
    if date.year() != year || date.month() != month || date.day() != day {
        return Err(TimeError::InvalidDate(input.to_string()));
    }
    Ok(date)
}

/// Parse a strict zero-padded 24-hour `HH:MM` birth time.
///
/// `None` means the birth time is unknown, which is a valid state and
/// distinct from a malformed string. `"9:00"` (no zero pad) and
/// `"25:00"` (hour out of range) are both format errors.
pub fn parse_birth_time(input: Option<&str>) -> Result<Option<NaiveTime>, TimeError> {
    let Some(s) = input else {
        return Ok(None);
    };
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(TimeError::InvalidTimeFormat(s.to_string()));
    }
    let (hour_s, minute_s) = (&s[0..2], &s[3..5]);
    if !all_ascii_digits(hour_s) || !all_ascii_digits(minute_s) {
        return Err(TimeError::InvalidTimeFormat(s.to_string()));
    }

    let hour: u32 = hour_s
        .parse()
        .map_err(|_| TimeError::InvalidTimeFormat(s.to_string()))?;
    let minute: u32 = minute_s
        .parse()
        .map_err(|_| TimeError::InvalidTimeFormat(s.to_string()))?;

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(Some)
        .ok_or_else(|| TimeError::InvalidTimeFormat(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_accepts_strict_shape() {
        let d = parse_birth_date("1990-01-15").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (1990, 1, 15));
    }

    #[test]
    fn date_rejects_loose_shapes() {
        for bad in ["1990-1-15", "90-01-15", "1990/01/15", "1990-01-15 ", "19900115"] {
            assert!(
                matches!(parse_birth_date(bad), Err(TimeError::InvalidDateFormat(_))),
                "{bad} should be a format error"
            );
        }
    }

    #[test]
    fn date_rejects_calendar_invalid() {
        assert!(matches!(
            parse_birth_date("1990-02-30"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birth_date("2023-02-29"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birth_date("1990-13-01"),
            Err(TimeError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birth_date("1990-00-10"),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn date_accepts_leap_day() {
        assert!(parse_birth_date("2024-02-29").is_ok());
    }

    #[test]
    fn time_none_is_valid_unknown() {
        assert_eq!(parse_birth_time(None).unwrap(), None);
    }

    #[test]
    fn time_accepts_strict_shape() {
        let t = parse_birth_time(Some("10:30")).unwrap().unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert!(parse_birth_time(Some("00:00")).is_ok());
        assert!(parse_birth_time(Some("23:59")).is_ok());
    }

    #[test]
    fn time_rejects_loose_shapes() {
        for bad in ["9:00", "25:00", "10:60", "10:3", "10-30", "1030", "10:30:00"] {
            assert!(
                matches!(
                    parse_birth_time(Some(bad)),
                    Err(TimeError::InvalidTimeFormat(_))
                ),
                "{bad} should be a format error"
            );
        }
    }
}
