//! Speculative move application for king-safety filtering.
//!
//! Trials run on an owned scratch copy of the board, so the caller's board
//! is never touched, whatever branch the candidate takes. Candidates within
//! one generation call are evaluated strictly sequentially, each against its
//! own copy.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color};
use crate::move_generation::attack_checks::is_square_attacked;
use crate::moves::chess_move::{ChessMove, MoveFlags};

/// Would `square` (normally the mover's king) be attacked once `mv` is
/// played?
pub fn would_be_attacked_after(
    board: &Board,
    square: BoardLocation,
    defender: Color,
    mv: &ChessMove,
) -> bool {
    let mut scratch = board.clone();
    relocate_for_trial(&mut scratch, mv);
    is_square_attacked(&scratch, square, defender)
}

/// Placement effects of `mv` only: the relocation plus the side effects that
/// change attack geometry (en-passant victim removal, castle rook shift).
/// Turn and history bookkeeping stay with real move application.
fn relocate_for_trial(board: &mut Board, mv: &ChessMove) {
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
            board.set(rook_from, None);
        }
    }

    let moving = board.view(mv.from);
    board.set(mv.to, moving);
    board.set(mv.from, None);
}
