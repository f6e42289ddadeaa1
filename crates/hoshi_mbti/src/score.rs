//! Compatibility scoring: base table lookup plus axis decomposition.

use serde::{Deserialize, Serialize};

use crate::matrix::BASE_SCORES;
use crate::types::MbtiType;

/// The four derived axis sub-scores, each clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    /// How easily the pair exchanges ideas.
    pub communication: u8,
    /// Resistance to friction (higher is calmer).
    pub conflict: u8,
    /// Long-run steadiness of the relationship.
    pub stability: u8,
    /// How much the pair stretches each other.
    pub growth: u8,
}

/// Qualitative band derived from the base score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// Base score 80 or above.
    Excellent,
    /// 65 to 79.
    Good,
    /// 50 to 64.
    Average,
    /// Below 50.
    Difficult,
}

impl Band {
    /// Band for a base score.
    pub const fn from_score(score: u8) -> Band {
        if score >= 80 {
            Band::Excellent
        } else if score >= 65 {
            Band::Good
        } else if score >= 50 {
            Band::Average
        } else {
            Band::Difficult
        }
    }

    /// Lowercase label as it appears in serialized results.
    pub const fn label(&self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::Average => "average",
            Band::Difficult => "difficult",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A scored pairing of two MBTI types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compatibility {
    /// Base score from the 16x16 table, 0-100.
    pub score: u8,
    /// The four axis sub-scores.
    pub axes: AxisScores,
    /// Qualitative band for the base score.
    pub summary: Band,
}

fn clamp_axis(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}

fn axis_scores(a: MbtiType, b: MbtiType) -> AxisScores {
    let la = a.letters();
    let lb = b.letters();

    let mut communication = 50;
    let mut conflict = 50;
    let mut stability = 50;
    let mut growth = 50;

    // I/E: shared attitude eases communication; two introverts also
    // settle into a steadier rhythm.
    if la[0] == lb[0] {
        communication += 20;
        if la[0] == b'I' {
            stability += 10;
        }
    }

    // S/N: a shared perception style helps communication (doubly
    // stabilizing for two sensors); a mismatch feeds growth instead.
    if la[1] == lb[1] {
        communication += 15;
        if la[1] == b'S' {
            stability += 15;
        }
    } else {
        growth += 10;
    }

    // T/F: a shared judgment style smooths both talk and friction.
    if la[2] == lb[2] {
        communication += 10;
        conflict += 15;
    }

    // J/P: shared structure preference calms conflict; two judgers
    // lock in stability.
    if la[3] == lb[3] {
        conflict += 15;
        if la[3] == b'J' {
            stability += 20;
        }
    }

    // Mostly-opposite pairs trade calm for growth.
    let differing = la.iter().zip(lb.iter()).filter(|(x, y)| x != y).count();
    if differing >= 3 {
        conflict -= 20;
        growth += 15;
    }

    AxisScores {
        communication: clamp_axis(communication),
        conflict: clamp_axis(conflict),
        stability: clamp_axis(stability),
        growth: clamp_axis(growth),
    }
}

/// Score a pairing of two MBTI types.
///
/// Order matters for the table lookup (`a` selects the row); the axis
/// decomposition is symmetric by construction.
pub fn compatibility(a: MbtiType, b: MbtiType) -> Compatibility {
    let score = BASE_SCORES[a.index()][b.index()];
    Compatibility {
        score,
        axes: axis_scores(a, b),
        summary: Band::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MbtiType::*;

    #[test]
    fn identical_type_collects_all_match_bonuses() {
        let c = compatibility(INTJ, INTJ);
        assert_eq!(c.score, 75);
        // 50 +20 +15 +10 = 95 communication; 50 +15 +15 = 80 conflict;
        // 50 +10(I) +20(J) = 80 stability; growth untouched.
        assert_eq!(c.axes.communication, 95);
        assert_eq!(c.axes.conflict, 80);
        assert_eq!(c.axes.stability, 80);
        assert_eq!(c.axes.growth, 50);
        assert_eq!(c.summary, Band::Good);
    }

    #[test]
    fn two_sensors_gain_extra_stability() {
        let c = compatibility(ISTJ, ISFJ);
        // Matches: I (+20 comm, +10 stab), S (+15 comm, +15 stab),
        // J (+15 conflict, +20 stab). T/F differs.
        assert_eq!(c.axes.communication, 85);
        assert_eq!(c.axes.conflict, 65);
        assert_eq!(c.axes.stability, 95);
        assert_eq!(c.axes.growth, 50);
    }

    #[test]
    fn mostly_opposite_pair_trades_conflict_for_growth() {
        // INTJ vs ESFP: all four letters differ.
        let c = compatibility(INTJ, ESFP);
        assert_eq!(c.score, 45);
        assert_eq!(c.axes.communication, 50);
        assert_eq!(c.axes.conflict, 30);
        assert_eq!(c.axes.stability, 50);
        assert_eq!(c.axes.growth, 75);
        assert_eq!(c.summary, Band::Difficult);
    }

    #[test]
    fn band_thresholds() {
        assert_eq!(Band::from_score(80), Band::Excellent);
        assert_eq!(Band::from_score(79), Band::Good);
        assert_eq!(Band::from_score(65), Band::Good);
        assert_eq!(Band::from_score(64), Band::Average);
        assert_eq!(Band::from_score(50), Band::Average);
        assert_eq!(Band::from_score(49), Band::Difficult);
        assert_eq!(Band::from_score(0), Band::Difficult);
    }

    #[test]
    fn axes_stay_in_range_for_all_ordered_pairs() {
        for a in crate::types::ALL_TYPES {
            for b in crate::types::ALL_TYPES {
                let c = compatibility(a, b);
                assert!(c.axes.communication <= 100);
                assert!(c.axes.conflict <= 100);
                assert!(c.axes.stability <= 100);
                assert!(c.axes.growth <= 100);
            }
        }
    }
}
