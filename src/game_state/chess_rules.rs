//! Canonical rule constants.

/// Placement field of the standard starting position, first record row on top.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
