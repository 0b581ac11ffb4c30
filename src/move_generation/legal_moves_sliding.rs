//! Ray moves for bishops, rooks, and queens.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_location, BoardLocation, Piece, PieceKind};
use crate::move_generation::attack_checks::{
    king_location, DIAGONAL_STEPS, EIGHT_WAY_STEPS, ORTHOGONAL_STEPS,
};
use crate::move_generation::trial_move::would_be_attacked_after;
use crate::moves::chess_move::{ChessMove, LegalMoveSet, MoveFlags};

pub fn generate_sliding_moves(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    out: &mut LegalMoveSet,
) -> Result<(), EngineError> {
    let steps: &[(i8, i8)] = match piece.kind {
        PieceKind::Bishop => &DIAGONAL_STEPS,
        PieceKind::Rook => &ORTHOGONAL_STEPS,
        _ => &EIGHT_WAY_STEPS,
    };
    let king = king_location(board, piece.color)?;

    for &(d_file, d_rank) in steps {
        let mut cursor = from;
        loop {
            cursor = match offset_location(cursor, d_file, d_rank) {
                Ok(next) => next,
                Err(_) => break,
            };
            match board.view(cursor) {
                Some(other) if other.color == piece.color => break,
                Some(_) => {
                    let mv = ChessMove::flagged(from, cursor, MoveFlags::CAPTURE);
                    if !would_be_attacked_after(board, king, piece.color, &mv) {
                        out.push(mv);
                    }
                    // The ray is blocked whether or not the capture was legal.
                    break;
                }
                None => {
                    let mv = ChessMove::new(from, cursor);
                    if !would_be_attacked_after(board, king, piece.color, &mv) {
                        out.push(mv);
                    }
                }
            }
        }
    }

    Ok(())
}
