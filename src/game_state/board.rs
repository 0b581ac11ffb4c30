//! The position container.
//!
//! An 8x8 grid of optional pieces plus the side to move and the per-square
//! history that castling, double pushes, and en passant depend on. The grid
//! is indexed `[file][rank]` with rank 0 being the first row of the
//! placement record.

use crate::errors::EngineError;
use crate::game_state::chess_rules::STARTING_PLACEMENT;
use crate::game_state::chess_types::{
    in_bounds, BoardLocation, Color, Piece, PieceKind, BOARD_SIZE,
};
use crate::utils::placement_generator::generate_placement;
use crate::utils::placement_parser::parse_placement;

const SIZE: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
    /// Whether the occupant of each square has moved since the position was
    /// loaded. Writing a square resets its entry; move application re-marks.
    moved: [[bool; SIZE]; SIZE],
    /// Square of the pawn that double-pushed on the previous half-move, if
    /// any. Valid for exactly one half-move; every application clears it.
    just_double_stepped: Option<BoardLocation>,
    turn: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board, White to move.
    pub fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            moved: [[false; SIZE]; SIZE],
            just_double_stepped: None,
            turn: Color::White,
        }
    }

    pub fn starting_position() -> Self {
        Self::from_placement(STARTING_PLACEMENT).expect("starting placement should always parse")
    }

    pub fn from_placement(text: &str) -> Result<Self, EngineError> {
        let mut board = Self::new();
        board.load(text)?;
        Ok(board)
    }

    /// Replace the grid from a placement string.
    ///
    /// Fails atomically: on any parse error the board is left unchanged. A
    /// successful load resets the per-square history and the double-step
    /// marker. The side to move is not part of the placement field and is
    /// kept as-is.
    pub fn load(&mut self, text: &str) -> Result<(), EngineError> {
        let cells = parse_placement(text)?;
        self.cells = cells;
        self.moved = [[false; SIZE]; SIZE];
        self.just_double_stepped = None;
        Ok(())
    }

    /// Serialize the grid back to a placement string. Row order mirrors
    /// [`Board::load`] exactly, so supported strings round-trip.
    pub fn placement(&self) -> String {
        generate_placement(self)
    }

    /// Bounds-checked read. `Err(OutOfBounds)` means "no such square", which
    /// is distinct from `Ok(None)`, an empty square.
    pub fn get(&self, at: BoardLocation) -> Result<Option<Piece>, EngineError> {
        if !in_bounds(at) {
            return Err(EngineError::OutOfBounds);
        }
        Ok(self.cells[at.0 as usize][at.1 as usize])
    }

    /// Unchecked read for locations already validated by `offset_location`.
    #[inline]
    pub fn view(&self, at: BoardLocation) -> Option<Piece> {
        self.cells[at.0 as usize][at.1 as usize]
    }

    /// Write a cell, silently ignoring off-board targets. Overwriting with
    /// `None` removes a piece. Any write resets the square's `moved` entry.
    pub fn set(&mut self, at: BoardLocation, occupant: Option<Piece>) {
        if !in_bounds(at) {
            return;
        }
        self.cells[at.0 as usize][at.1 as usize] = occupant;
        self.moved[at.0 as usize][at.1 as usize] = false;
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    pub fn flip_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Whether the occupant of `at` has moved since the position was loaded.
    /// Off-board and empty squares report `false`.
    #[inline]
    pub fn has_moved(&self, at: BoardLocation) -> bool {
        in_bounds(at) && self.moved[at.0 as usize][at.1 as usize]
    }

    pub fn mark_moved(&mut self, at: BoardLocation) {
        if in_bounds(at) {
            self.moved[at.0 as usize][at.1 as usize] = true;
        }
    }

    #[inline]
    pub fn just_double_stepped(&self) -> Option<BoardLocation> {
        self.just_double_stepped
    }

    pub fn set_just_double_stepped(&mut self, marker: Option<BoardLocation>) {
        self.just_double_stepped = marker;
    }

    /// First piece of the given kind and color in rank-major scan order
    /// (rank 0..8 outer, file 0..8 inner).
    pub fn find(&self, kind: PieceKind, color: Color) -> Option<BoardLocation> {
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                if let Some(piece) = self.view((file, rank)) {
                    if piece.kind == kind && piece.color == color {
                        return Some((file, rank));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_round_trips() {
        let board = Board::starting_position();
        assert_eq!(board.placement(), STARTING_PLACEMENT);
        assert_eq!(board.turn(), Color::White);
    }

    #[test]
    fn get_distinguishes_empty_from_off_board() {
        let board = Board::starting_position();
        assert_eq!(board.get((8, 0)), Err(EngineError::OutOfBounds));
        assert_eq!(board.get((0, -1)), Err(EngineError::OutOfBounds));
        assert_eq!(board.get((4, 4)).expect("d4 should be a square"), None);
        assert_eq!(
            board.get((4, 7)).expect("e1 should be a square"),
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }

    #[test]
    fn set_ignores_off_board_targets() {
        let mut board = Board::new();
        board.set((9, 9), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn load_failure_leaves_board_unchanged() {
        let mut board = Board::starting_position();
        let err = board.load("rnbqkbnr/ppxppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(err, Err(EngineError::InvalidPlacementChar { character: 'x' }));
        assert_eq!(board.placement(), STARTING_PLACEMENT);
    }

    #[test]
    fn find_scans_rank_major() {
        let board = Board::starting_position();
        assert_eq!(board.find(PieceKind::King, Color::Black), Some((4, 0)));
        assert_eq!(board.find(PieceKind::King, Color::White), Some((4, 7)));
        // Both rooks exist; the rank-major scan reports the record-first one.
        assert_eq!(board.find(PieceKind::Rook, Color::Black), Some((0, 0)));
        let empty = Board::new();
        assert_eq!(empty.find(PieceKind::King, Color::White), None);
    }

    #[test]
    fn writes_reset_square_history() {
        let mut board = Board::starting_position();
        board.mark_moved((4, 6));
        assert!(board.has_moved((4, 6)));
        board.set((4, 6), None);
        assert!(!board.has_moved((4, 6)));
        assert!(!board.has_moved((99, 99)));
    }
}
