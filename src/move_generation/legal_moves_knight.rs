//! Leaper moves for knights.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_location, BoardLocation, Piece};
use crate::move_generation::attack_checks::{king_location, KNIGHT_STEPS};
use crate::move_generation::trial_move::would_be_attacked_after;
use crate::moves::chess_move::{ChessMove, LegalMoveSet, MoveFlags};

pub fn generate_knight_moves(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    out: &mut LegalMoveSet,
) -> Result<(), EngineError> {
    let king = king_location(board, piece.color)?;

    for &(d_file, d_rank) in &KNIGHT_STEPS {
        let Ok(target) = offset_location(from, d_file, d_rank) else {
            continue;
        };
        let mv = match board.view(target) {
            Some(other) if other.color == piece.color => continue,
            Some(_) => ChessMove::flagged(from, target, MoveFlags::CAPTURE),
            None => ChessMove::new(from, target),
        };
        if !would_be_attacked_after(board, king, piece.color, &mv) {
            out.push(mv);
        }
    }

    Ok(())
}
