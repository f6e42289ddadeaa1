//! The sixteen MBTI type codes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error for a string outside the 16-code domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MbtiError {
    /// Not one of the sixteen 4-letter codes.
    #[error("unknown MBTI type: {0:?}")]
    UnknownType(String),
}

/// One of the sixteen 4-letter MBTI codes.
///
/// Each letter is drawn from one of four binary axes: I/E, S/N, T/F,
/// J/P. The variant order is the row/column order of the compatibility
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum MbtiType {
    INTJ,
    INTP,
    ENTJ,
    ENTP,
    INFJ,
    INFP,
    ENFJ,
    ENFP,
    ISTJ,
    ISFJ,
    ESTJ,
    ESFJ,
    ISTP,
    ISFP,
    ESTP,
    ESFP,
}

/// All sixteen types in table order.
pub const ALL_TYPES: [MbtiType; 16] = [
    MbtiType::INTJ,
    MbtiType::INTP,
    MbtiType::ENTJ,
    MbtiType::ENTP,
    MbtiType::INFJ,
    MbtiType::INFP,
    MbtiType::ENFJ,
    MbtiType::ENFP,
    MbtiType::ISTJ,
    MbtiType::ISFJ,
    MbtiType::ESTJ,
    MbtiType::ESFJ,
    MbtiType::ISTP,
    MbtiType::ISFP,
    MbtiType::ESTP,
    MbtiType::ESFP,
];

impl MbtiType {
    /// The 4-letter code.
    pub const fn code(&self) -> &'static str {
        match self {
            MbtiType::INTJ => "INTJ",
            MbtiType::INTP => "INTP",
            MbtiType::ENTJ => "ENTJ",
            MbtiType::ENTP => "ENTP",
            MbtiType::INFJ => "INFJ",
            MbtiType::INFP => "INFP",
            MbtiType::ENFJ => "ENFJ",
            MbtiType::ENFP => "ENFP",
            MbtiType::ISTJ => "ISTJ",
            MbtiType::ISFJ => "ISFJ",
            MbtiType::ESTJ => "ESTJ",
            MbtiType::ESFJ => "ESFJ",
            MbtiType::ISTP => "ISTP",
            MbtiType::ISFP => "ISFP",
            MbtiType::ESTP => "ESTP",
            MbtiType::ESFP => "ESFP",
        }
    }

    /// Zero-based index in table order.
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The four axis letters as ASCII bytes.
    pub const fn letters(&self) -> [u8; 4] {
        let b = self.code().as_bytes();
        [b[0], b[1], b[2], b[3]]
    }

    /// All sixteen types in table order.
    pub const fn all() -> &'static [MbtiType; 16] {
        &ALL_TYPES
    }
}

impl std::fmt::Display for MbtiType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MbtiType {
    type Err = MbtiError;

    /// Case-insensitive lookup of a 4-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        ALL_TYPES
            .into_iter()
            .find(|t| t.code() == upper)
            .ok_or_else(|| MbtiError::UnknownType(s.to_string()))
    }
}
