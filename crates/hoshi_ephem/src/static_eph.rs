//! A deterministic canned ephemeris.
//!
//! `StaticEphemeris` returns pre-seeded positions for any requested
//! Julian Day. It is the test double the chart builders are verified
//! against, and the CLI's offline chart source when the caller supplies
//! explicit longitudes.

use crate::body::{Body, HouseSystem};
use crate::error::EphemerisError;
use crate::provider::{BodyPosition, EphemerisProvider, HouseAngles};

/// Canned provider built from explicit per-body positions.
///
/// Bodies that were never seeded fail with
/// [`EphemerisError::UnsupportedBody`], exercising the same abort path
/// a real provider failure takes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticEphemeris {
    positions: [Option<BodyPosition>; 10],
    houses: Option<HouseAngles>,
}

impl StaticEphemeris {
    /// Empty provider; every request fails until positions are seeded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider seeded with bare longitudes for the given bodies.
    pub fn from_longitudes(longitudes: &[(Body, f64)]) -> Self {
        let mut eph = Self::new();
        for &(body, lon) in longitudes {
            eph.positions[body.id() as usize] = Some(BodyPosition::from_longitude(lon));
        }
        eph
    }

    /// Seed a full position record for a body.
    pub fn with_position(mut self, body: Body, position: BodyPosition) -> Self {
        self.positions[body.id() as usize] = Some(position);
        self
    }

    /// Seed the house angles returned for any location.
    pub fn with_houses(mut self, houses: HouseAngles) -> Self {
        self.houses = Some(houses);
        self
    }

    /// Seed house angles from just an ascendant longitude.
    pub fn with_ascendant(self, ascendant: f64) -> Self {
        self.with_houses(HouseAngles {
            ascendant,
            midheaven: 0.0,
            cusps: [0.0; 12],
        })
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn calc_position(
        &self,
        _jd: f64,
        body: Body,
        _flags: u32,
    ) -> Result<BodyPosition, EphemerisError> {
        self.positions[body.id() as usize].ok_or(EphemerisError::UnsupportedBody(body))
    }

    fn calc_houses(
        &self,
        _jd: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        self.houses.ok_or(EphemerisError::Houses { status: -1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::flags;

    #[test]
    fn returns_seeded_position_for_any_jd() {
        let eph = StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5)]);
        let a = eph
            .calc_position(2_447_906.5, Body::Sun, flags::MAIN_EPHEMERIS)
            .unwrap();
        let b = eph
            .calc_position(2_451_545.0, Body::Sun, flags::MAIN_EPHEMERIS | flags::SPEED)
            .unwrap();
        assert_eq!(a, b);
        assert!((a.longitude - 294.5).abs() < 1e-12);
    }

    #[test]
    fn unseeded_body_fails() {
        let eph = StaticEphemeris::from_longitudes(&[(Body::Sun, 294.5)]);
        assert_eq!(
            eph.calc_position(2_451_545.0, Body::Moon, flags::MAIN_EPHEMERIS),
            Err(EphemerisError::UnsupportedBody(Body::Moon))
        );
    }

    #[test]
    fn houses_fail_until_seeded() {
        let bare = StaticEphemeris::new();
        assert!(bare
            .calc_houses(2_451_545.0, 35.68, 139.69, HouseSystem::Placidus)
            .is_err());

        let seeded = StaticEphemeris::new().with_ascendant(123.0);
        let houses = seeded
            .calc_houses(2_451_545.0, 35.68, 139.69, HouseSystem::Placidus)
            .unwrap();
        assert!((houses.ascendant - 123.0).abs() < 1e-12);
    }

    #[test]
    fn full_record_round_trips() {
        let pos = BodyPosition {
            longitude: 101.25,
            latitude: -1.2,
            distance: 0.983,
            speed: 1.019,
        };
        let eph = StaticEphemeris::new().with_position(Body::Sun, pos);
        assert_eq!(
            eph.calc_position(0.0, Body::Sun, flags::MAIN_EPHEMERIS)
                .unwrap(),
            pos
        );
    }
}
