use std::fmt;

use crate::game_state::chess_types::Color;

/// Represents all error conditions surfaced by the rules engine.
/// Used throughout the codebase for error handling and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate query or step landed outside the board.
    OutOfBounds,
    /// An unrecognized character appeared in a placement string.
    InvalidPlacementChar {
        /// The offending character.
        character: char,
    },
    /// A placement string did not contain one row per rank.
    BadRankCount {
        /// Number of rows found.
        found: usize,
    },
    /// A placement row described more or fewer squares than the board width.
    BadRankLength {
        /// Zero-based row index within the placement string.
        rank: usize,
        /// Number of squares the row described.
        length: usize,
    },
    /// An algebraic square name could not be parsed.
    InvalidSquareName {
        /// The string that failed to parse.
        found: String,
    },
    /// Move generation needed a king that is not on the board.
    MissingKing {
        /// The side whose king is absent.
        color: Color,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfBounds => {
                write!(f, "location is outside the board")
            }
            EngineError::InvalidPlacementChar { character } => {
                write!(f, "invalid placement character: '{character}'")
            }
            EngineError::BadRankCount { found } => {
                write!(f, "expected 8 rows in placement, found {found}")
            }
            EngineError::BadRankLength { rank, length } => {
                write!(f, "placement row {rank} describes {length} squares, expected 8")
            }
            EngineError::InvalidSquareName { found } => {
                write!(f, "invalid algebraic square: \"{found}\"")
            }
            EngineError::MissingKing { color } => {
                write!(f, "no {color:?} king on the board")
            }
        }
    }
}

impl std::error::Error for EngineError {}
