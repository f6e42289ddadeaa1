//! Pairwise aspect detection over a planet set.

use crate::types::{Aspect, AspectType, PlanetPosition};

/// One row of the aspect definition table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDef {
    /// The aspect type.
    pub kind: AspectType,
    /// Exact angle in degrees.
    pub angle: f64,
    /// Allowed deviation from the exact angle, in degrees.
    pub orb: f64,
}

/// The five recognized aspects, in match-priority order.
///
/// When a separation falls inside two orbs (conjunction at 0 and
/// sextile at 60 can never overlap, but 8 and 7 degree orbs make some
/// neighbors close), the earlier row wins and the later is never
/// reported.
pub const ASPECT_DEFINITIONS: [AspectDef; 5] = [
    AspectDef {
        kind: AspectType::Conjunction,
        angle: 0.0,
        orb: 8.0,
    },
    AspectDef {
        kind: AspectType::Opposition,
        angle: 180.0,
        orb: 8.0,
    },
    AspectDef {
        kind: AspectType::Trine,
        angle: 120.0,
        orb: 8.0,
    },
    AspectDef {
        kind: AspectType::Square,
        angle: 90.0,
        orb: 7.0,
    },
    AspectDef {
        kind: AspectType::Sextile,
        angle: 60.0,
        orb: 6.0,
    },
];

/// Shortest-arc angular separation between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let raw = (lon1 - lon2).abs();
    if raw > 180.0 { 360.0 - raw } else { raw }
}

/// Classify a separation against the definition table.
///
/// Returns the first matching aspect and its orb (absolute deviation
/// from the exact angle), or `None` when nothing matches.
pub fn classify_separation(separation: f64) -> Option<(AspectType, f64)> {
    for def in &ASPECT_DEFINITIONS {
        let orb = (separation - def.angle).abs();
        if orb <= def.orb {
            return Some((def.kind, orb));
        }
    }
    None
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Detect aspects over every unordered pair of the planet set.
///
/// Pairs matching no definition simply produce no record. Each pair is
/// reported with at most one aspect.
pub fn detect_aspects(planets: &[PlanetPosition]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..planets.len() {
        for j in (i + 1)..planets.len() {
            let separation = angular_separation(planets[i].longitude, planets[j].longitude);
            if let Some((kind, orb)) = classify_separation(separation) {
                aspects.push(Aspect {
                    planet1: planets[i].body,
                    planet2: planets[j].body,
                    aspect: kind,
                    orb: round2(orb),
                });
            }
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_is_shortest_arc() {
        assert!((angular_separation(10.0, 190.0) - 180.0).abs() < 1e-12);
        assert!((angular_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((angular_separation(5.0, 5.0)).abs() < 1e-12);
    }

    #[test]
    fn exact_opposition() {
        let (kind, orb) = classify_separation(180.0).unwrap();
        assert_eq!(kind, AspectType::Opposition);
        assert!(orb.abs() < 1e-12);
    }

    #[test]
    fn square_beats_sextile_near_88() {
        // 88 deg is within the square orb (7) and outside sextile (6).
        let (kind, orb) = classify_separation(88.0).unwrap();
        assert_eq!(kind, AspectType::Square);
        assert!((orb - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unmatched_separation_is_none() {
        assert_eq!(classify_separation(40.0), None);
        assert_eq!(classify_separation(105.0), None);
    }

    #[test]
    fn orb_edges_are_inclusive() {
        assert_eq!(
            classify_separation(8.0).map(|(k, _)| k),
            Some(AspectType::Conjunction)
        );
        assert_eq!(classify_separation(8.000001), None);
        assert_eq!(
            classify_separation(66.0).map(|(k, _)| k),
            Some(AspectType::Sextile)
        );
    }

    #[test]
    fn priority_order_matches_table() {
        let kinds: Vec<AspectType> = ASPECT_DEFINITIONS.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AspectType::Conjunction,
                AspectType::Opposition,
                AspectType::Trine,
                AspectType::Square,
                AspectType::Sextile,
            ]
        );
    }
}
