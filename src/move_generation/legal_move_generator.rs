//! Per-square legal move computation.
//!
//! Dispatches to the piece-specific generators, each of which already
//! filters every candidate for king safety, so the sets returned here are
//! fully legal.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color, PieceKind, BOARD_SIZE};
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::generate_sliding_moves;
use crate::moves::chess_move::{ChessMove, LegalMoveSet};

/// All legal moves for the piece on `from`. An empty square yields an empty
/// set; a square off the board is an error.
pub fn legal_moves(board: &Board, from: BoardLocation) -> Result<LegalMoveSet, EngineError> {
    let occupant = board.get(from)?;
    let mut out = LegalMoveSet::new();
    let Some(piece) = occupant else {
        return Ok(out);
    };

    match piece.kind {
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_sliding_moves(board, from, piece, &mut out)?
        }
        PieceKind::Knight => generate_knight_moves(board, from, piece, &mut out)?,
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, &mut out)?,
        PieceKind::King => generate_king_moves(board, from, piece, &mut out)?,
    }

    Ok(out)
}

/// Every legal move for `color`, square by square in rank-major order.
pub fn legal_moves_for_color(
    board: &Board,
    color: Color,
) -> Result<Vec<ChessMove>, EngineError> {
    let mut all = Vec::new();
    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            let at = (file, rank);
            if let Some(piece) = board.view(at) {
                if piece.color == color {
                    all.extend(legal_moves(board, at)?.iter().copied());
                }
            }
        }
    }
    Ok(all)
}
