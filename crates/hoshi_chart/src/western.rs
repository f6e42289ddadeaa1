//! Tropical (Western) chart calculation.

use hoshi_ephem::{flags, Body, EphemerisProvider, HouseSystem, ALL_BODIES};
use hoshi_time::normalize_birth;
use hoshi_zodiac::{normalize_360, sign_from_longitude};

use crate::aspect::detect_aspects;
use crate::error::ChartError;
use crate::types::{BirthInput, PlanetPosition, WesternReading};
use crate::util::{effective_location, round6, NOON};

fn resolve_planet(
    provider: &impl EphemerisProvider,
    jd: f64,
    body: Body,
) -> Result<PlanetPosition, ChartError> {
    let raw = provider.calc_position(jd, body, flags::MAIN_EPHEMERIS | flags::SPEED)?;
    let longitude = round6(normalize_360(raw.longitude));
    let info = sign_from_longitude(longitude);
    Ok(PlanetPosition {
        body,
        longitude,
        latitude: raw.latitude,
        distance: raw.distance,
        speed: raw.speed,
        sign: info.sign,
        // Floor, never round: 29.9 deg must not report as 30 and imply
        // the next sign.
        degree: info.degrees_in_sign as u8,
    })
}

/// Build a tropical chart reading for a birth record.
///
/// An unknown birth time is treated as local noon before timezone
/// conversion. All ten bodies are queried; any provider failure aborts
/// the whole chart. The ascendant is computed only when the birth time
/// and both coordinates are present.
pub fn calc_western_chart(
    provider: &impl EphemerisProvider,
    input: &BirthInput,
) -> Result<WesternReading, ChartError> {
    let location = effective_location(input)?;
    let effective_time = input.time.unwrap_or(NOON);
    let normalized = normalize_birth(input.date, Some(effective_time), &input.timezone)?;
    let jd = normalized.julian_day;

    let mut planets = Vec::with_capacity(ALL_BODIES.len());
    for body in ALL_BODIES {
        planets.push(resolve_planet(provider, jd, body)?);
    }

    // Sun and Moon lead the body order.
    let sun_sign = planets[0].sign;
    let moon_sign = planets[1].sign;

    let ascendant = match (input.time, location) {
        (Some(_), Some((lat, lon))) => {
            let houses = provider.calc_houses(jd, lat, lon, HouseSystem::Placidus)?;
            Some(sign_from_longitude(houses.ascendant).sign)
        }
        _ => None,
    };

    let aspects = detect_aspects(&planets);

    Ok(WesternReading {
        sun_sign,
        moon_sign,
        ascendant,
        planets,
        aspects,
    })
}
