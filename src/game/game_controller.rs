//! Move application, turn switching, and checkmate detection.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, BOARD_SIZE};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::chess_move::{ChessMove, MoveFlags};

/// The per-half-move state machine: the game either continues with a side to
/// move or has reached a mate. No draw or resignation terminals exist here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    ToMove(Color),
    Checkmated(Color),
}

/// Apply a legal move's full side effects and flip the turn.
///
/// A move whose source square is empty is ignored; callers obtain moves from
/// generation against the current board, so this only guards misuse.
pub fn apply_move(board: &mut Board, mv: &ChessMove) {
    let Ok(Some(mut piece)) = board.get(mv.from) else {
        return;
    };

    if mv.flags.contains(MoveFlags::EN_PASSANT) {
        if let Some(victim) = mv.reference {
            board.set(victim, None);
        }
    }

    if mv.flags.contains(MoveFlags::CASTLE) {
        if let Some(rook_from) = mv.reference {
            let rook_to = if rook_from.0 < mv.from.0 {
                (mv.to.0 + 1, mv.from.1)
            } else {
                (mv.to.0 - 1, mv.from.1)
            };
            let rook = board.view(rook_from);
            board.set(rook_to, rook);
            board.mark_moved(rook_to);
            board.set(rook_from, None);
        }
    }

    // A double push arms en passant for the opponent's next half-move only;
    // every other application clears the marker, so a stale one can never be
    // read as current.
    board.set_just_double_stepped(
        mv.flags
            .contains(MoveFlags::DOUBLE_PAWN_PUSH)
            .then_some(mv.to),
    );

    if mv.flags.contains(MoveFlags::PROMOTION) {
        piece = Piece::new(piece.color, PieceKind::Queen);
    }

    board.set(mv.to, Some(piece));
    board.mark_moved(mv.to);
    board.set(mv.from, None);
    board.flip_turn();
}

/// True iff no piece of `color` has any legal move.
///
/// An exhaustive probe over every piece with no early shortcut beyond the
/// first non-empty set; recomputed from scratch after every half-move and
/// never cached.
pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, EngineError> {
    for rank in 0..BOARD_SIZE {
        for file in 0..BOARD_SIZE {
            let at = (file, rank);
            if let Some(piece) = board.view(at) {
                if piece.color == color && !legal_moves(board, at)?.is_empty() {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}
