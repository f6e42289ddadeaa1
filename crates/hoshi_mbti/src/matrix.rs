//! The 16x16 base compatibility table.
//!
//! Transcribed literally from the reference data, row by row. The
//! table is nearly but not perfectly symmetric; it is kept as a data
//! asset rather than compressed into a formula, asymmetries intact.

/// Base scores indexed by `[first.index()][second.index()]`.
///
/// Row and column order: INTJ, INTP, ENTJ, ENTP, INFJ, INFP, ENFJ,
/// ENFP, ISTJ, ISFJ, ESTJ, ESFJ, ISTP, ISFP, ESTP, ESFP.
#[rustfmt::skip]
pub(crate) const BASE_SCORES: [[u8; 16]; 16] = [
    // INTJ
    [75, 83, 85, 88, 82, 72, 72, 90, 78, 67, 68, 50, 68, 57, 55, 45],
    // INTP
    [83, 75, 82, 85, 72, 82, 62, 85, 68, 57, 58, 55, 78, 67, 68, 50],
    // ENTJ
    [85, 82, 75, 83, 72, 88, 82, 72, 68, 52, 78, 67, 58, 55, 68, 55],
    // ENTP
    [88, 85, 83, 75, 90, 72, 72, 82, 58, 55, 68, 57, 68, 57, 78, 67],
    // INFJ
    [82, 72, 72, 90, 75, 83, 83, 88, 67, 78, 55, 68, 57, 68, 52, 58],
    // INFP
    [72, 82, 88, 72, 83, 75, 90, 83, 57, 68, 50, 58, 67, 78, 57, 68],
    // ENFJ
    [72, 62, 82, 72, 83, 90, 75, 83, 51, 68, 67, 78, 52, 85, 57, 68],
    // ENFP
    [90, 85, 72, 82, 88, 83, 83, 75, 50, 58, 55, 68, 57, 68, 67, 78],
    // ISTJ
    [78, 68, 68, 58, 67, 57, 51, 50, 75, 81, 82, 71, 82, 71, 68, 65],
    // ISFJ
    [67, 57, 52, 55, 78, 68, 68, 58, 81, 75, 71, 82, 71, 82, 70, 82],
    // ESTJ
    [68, 58, 78, 68, 55, 50, 67, 55, 82, 71, 75, 81, 78, 72, 82, 71],
    // ESFJ
    [50, 55, 67, 57, 68, 58, 78, 68, 71, 82, 81, 75, 74, 86, 71, 82],
    // ISTP
    [68, 78, 58, 68, 57, 67, 52, 57, 82, 71, 78, 74, 75, 81, 82, 71],
    // ISFP
    [57, 67, 55, 57, 68, 78, 85, 68, 71, 82, 72, 86, 81, 75, 71, 82],
    // ESTP
    [55, 68, 68, 78, 52, 57, 57, 67, 68, 70, 82, 71, 82, 71, 75, 81],
    // ESFP
    [45, 50, 55, 67, 58, 68, 68, 78, 65, 82, 71, 82, 71, 82, 81, 75],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_TYPES;

    #[test]
    fn diagonal_is_75() {
        for t in ALL_TYPES {
            assert_eq!(BASE_SCORES[t.index()][t.index()], 75, "{t}");
        }
    }

    #[test]
    fn all_scores_in_range() {
        for row in &BASE_SCORES {
            for &score in row {
                assert!(score <= 100);
            }
        }
    }

    #[test]
    fn known_cells_survive_transcription() {
        use crate::types::MbtiType::*;
        // Spot checks against the reference rows.
        assert_eq!(BASE_SCORES[INTJ.index()][ENFP.index()], 90);
        assert_eq!(BASE_SCORES[ESFP.index()][INTJ.index()], 45);
        assert_eq!(BASE_SCORES[ENFJ.index()][ISFP.index()], 85);
        assert_eq!(BASE_SCORES[ESTP.index()][ISFJ.index()], 70);
    }

    #[test]
    fn table_is_not_assumed_symmetric() {
        use crate::types::MbtiType::*;
        // The reference data happens to mirror these; pin them as data,
        // not as a symmetry guarantee.
        assert_eq!(
            BASE_SCORES[ESTJ.index()][ISFP.index()],
            BASE_SCORES[ISFP.index()][ESTJ.index()]
        );
    }
}
