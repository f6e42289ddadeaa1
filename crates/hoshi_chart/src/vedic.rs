//! Sidereal (Vedic) chart calculation.
//!
//! The Vedic path reads only the Sun and Moon, shifts their tropical
//! longitudes into the sidereal frame with the Lahiri ayanamsha, and
//! resolves rashi and nakshatra. No aspects are computed here.

use hoshi_ephem::{flags, Body, EphemerisProvider, HouseSystem};
use hoshi_time::normalize_birth;
use hoshi_zodiac::{
    lahiri_ayanamsha, nakshatra_from_longitude, rashi_from_longitude, sidereal_from_tropical,
};

use crate::error::ChartError;
use crate::types::{BirthInput, VedicReading};
use crate::util::{effective_location, NOON};

/// Build a sidereal chart reading for a birth record.
///
/// Shares the Western builder's local-noon default for an unknown
/// birth time. The ascendant rashi follows the same gating as the
/// Western ascendant and is ayanamsha-corrected before mapping.
pub fn calc_vedic_chart(
    provider: &impl EphemerisProvider,
    input: &BirthInput,
) -> Result<VedicReading, ChartError> {
    let location = effective_location(input)?;
    let effective_time = input.time.unwrap_or(NOON);
    let normalized = normalize_birth(input.date, Some(effective_time), &input.timezone)?;
    let jd = normalized.julian_day;

    let sun = provider.calc_position(jd, Body::Sun, flags::MAIN_EPHEMERIS)?;
    let moon = provider.calc_position(jd, Body::Moon, flags::MAIN_EPHEMERIS)?;

    let sidereal_sun = sidereal_from_tropical(sun.longitude, jd);
    let sidereal_moon = sidereal_from_tropical(moon.longitude, jd);

    let sun_info = rashi_from_longitude(sidereal_sun);
    let moon_info = rashi_from_longitude(sidereal_moon);
    let moon_nakshatra = nakshatra_from_longitude(sidereal_moon).nakshatra;

    let ascendant_rashi = match (input.time, location) {
        (Some(_), Some((lat, lon))) => {
            let houses = provider.calc_houses(jd, lat, lon, HouseSystem::Placidus)?;
            let sidereal_asc = houses.ascendant - lahiri_ayanamsha(jd);
            Some(rashi_from_longitude(sidereal_asc).rashi)
        }
        _ => None,
    };

    Ok(VedicReading {
        sun_rashi: sun_info.rashi,
        sun_degree: sun_info.degrees_in_rashi as u8,
        moon_rashi: moon_info.rashi,
        moon_degree: moon_info.degrees_in_rashi as u8,
        moon_nakshatra,
        ascendant_rashi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use hoshi_ephem::StaticEphemeris;
    use hoshi_zodiac::{Nakshatra, Rashi};

    fn sun_moon_provider() -> StaticEphemeris {
        StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5), (Body::Moon, 100.0)])
    }

    fn birth() -> BirthInput {
        BirthInput::new(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(), "Asia/Tokyo")
            .with_time(NaiveTime::from_hms_opt(10, 30, 0).unwrap())
    }

    #[test]
    fn ayanamsha_shifts_the_rashi() {
        // JD 2447906.5625; ayanamsha ~23.71 deg. Sidereal Sun ~270.79
        // (Makara), sidereal Moon ~76.29 (Mithuna).
        let reading = calc_vedic_chart(&sun_moon_provider(), &birth()).unwrap();
        assert_eq!(reading.sun_rashi, Rashi::Makara);
        assert_eq!(reading.sun_degree, 0);
        assert_eq!(reading.moon_rashi, Rashi::Mithuna);
        assert_eq!(reading.moon_degree, 16);
    }

    #[test]
    fn moon_nakshatra_from_sidereal_moon() {
        // Sidereal Moon ~76.29 deg sits in segment 5 (Ardra,
        // 66.67-80.00).
        let reading = calc_vedic_chart(&sun_moon_provider(), &birth()).unwrap();
        assert_eq!(reading.moon_nakshatra, Nakshatra::Ardra);
    }

    #[test]
    fn moon_nakshatra_segment_boundary() {
        let provider =
            StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5), (Body::Moon, 90.1)]);
        let reading = calc_vedic_chart(&provider, &birth()).unwrap();
        // Sidereal ~66.38, the last sliver of Mrigashira (53.33-66.67).
        assert_eq!(reading.moon_nakshatra, Nakshatra::Mrigashira);

        let provider =
            StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5), (Body::Moon, 91.0)]);
        let reading = calc_vedic_chart(&provider, &birth()).unwrap();
        // Sidereal ~67.28 crosses into Ardra (66.67-80.00).
        assert_eq!(reading.moon_nakshatra, Nakshatra::Ardra);
    }

    #[test]
    fn ascendant_rashi_gated_like_western() {
        let no_coords = calc_vedic_chart(&sun_moon_provider(), &birth()).unwrap();
        assert_eq!(no_coords.ascendant_rashi, None);

        let provider = sun_moon_provider().with_ascendant(100.0);
        let with_coords =
            calc_vedic_chart(&provider, &birth().with_location(35.68, 139.69)).unwrap();
        // Tropical ascendant 100 deg minus ~23.71 ayanamsha is ~76.29,
        // in Mithuna.
        assert_eq!(with_coords.ascendant_rashi, Some(Rashi::Mithuna));
    }

    #[test]
    fn only_sun_and_moon_are_required() {
        // No outer planets seeded; the Vedic path must still succeed.
        assert!(calc_vedic_chart(&sun_moon_provider(), &birth()).is_ok());
    }

    #[test]
    fn missing_moon_fails_the_chart() {
        let provider = StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5)]);
        assert!(matches!(
            calc_vedic_chart(&provider, &birth()),
            Err(ChartError::Ephemeris(_))
        ));
    }
}
