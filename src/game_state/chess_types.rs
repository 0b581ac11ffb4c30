//! Shared position primitives: colors, piece kinds, and board coordinates.

use crate::errors::EngineError;

/// Width and height of the square board.
pub const BOARD_SIZE: i8 = 8;

/// A `(file, rank)` pair. File 0 is the leftmost column; rank 0 is the first
/// row of the placement record (the side listed first in the record string,
/// which for the standard start is Black's back rank).
pub type BoardLocation = (i8, i8);

/// Whether a location lies on the board.
#[inline]
pub fn in_bounds(at: BoardLocation) -> bool {
    at.0 >= 0 && at.0 < BOARD_SIZE && at.1 >= 0 && at.1 < BOARD_SIZE
}

/// Step a location by a file/rank delta.
///
/// Stepping off the board is an explicit `OutOfBounds` error so callers can
/// distinguish "no such square" from "empty square".
#[inline]
pub fn offset_location(
    at: BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, EngineError> {
    let stepped = (at.0 + d_file, at.1 + d_rank);
    if in_bounds(stepped) {
        Ok(stepped)
    } else {
        Err(EngineError::OutOfBounds)
    }
}

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by. White sits on the last
    /// rows of the record and pushes toward rank 0.
    #[inline]
    pub const fn forward_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Bishops, rooks, and queens move along rays until blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

/// An occupant of a board square. Equality is identity (color and kind);
/// per-square history lives on the board, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_respect_board_edges() {
        assert_eq!(offset_location((0, 0), 1, 1).expect("step should stay on board"), (1, 1));
        assert_eq!(offset_location((0, 0), -1, 0), Err(EngineError::OutOfBounds));
        assert_eq!(offset_location((7, 7), 0, 1), Err(EngineError::OutOfBounds));
    }

    #[test]
    fn pawn_directions_oppose() {
        assert_eq!(Color::White.forward_step(), -Color::Black.forward_step());
        assert_eq!(Color::White.promotion_rank(), 0);
        assert_eq!(Color::Black.promotion_rank(), 7);
    }

    #[test]
    fn piece_equality_ignores_nothing() {
        let a = Piece::new(Color::White, PieceKind::Rook);
        let b = Piece::new(Color::White, PieceKind::Rook);
        let c = Piece::new(Color::Black, PieceKind::Rook);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
