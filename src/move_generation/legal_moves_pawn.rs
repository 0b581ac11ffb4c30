//! Pawn moves: pushes, double pushes, diagonal captures, en passant, and
//! promotion flagging.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_location, BoardLocation, Color, Piece, PieceKind};
use crate::move_generation::attack_checks::king_location;
use crate::move_generation::trial_move::would_be_attacked_after;
use crate::moves::chess_move::{ChessMove, LegalMoveSet, MoveFlags};

pub fn generate_pawn_moves(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    out: &mut LegalMoveSet,
) -> Result<(), EngineError> {
    let king = king_location(board, piece.color)?;
    let forward = piece.color.forward_step();

    // Single push, and the double push behind it.
    if let Ok(ahead) = offset_location(from, 0, forward) {
        if board.view(ahead).is_none() {
            let mv = ChessMove::flagged(from, ahead, promotion_flag(piece.color, ahead));
            push_if_safe(board, king, piece.color, mv, out);

            if !board.has_moved(from) {
                if let Ok(two_ahead) = offset_location(from, 0, 2 * forward) {
                    if board.view(two_ahead).is_none() {
                        let mv = ChessMove::flagged(
                            from,
                            two_ahead,
                            MoveFlags::DOUBLE_PAWN_PUSH,
                        );
                        push_if_safe(board, king, piece.color, mv, out);
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_file in [-1, 1] {
        let Ok(target) = offset_location(from, d_file, forward) else {
            continue;
        };
        if let Some(other) = board.view(target) {
            if other.color != piece.color {
                let flags = MoveFlags::CAPTURE.with(promotion_flag(piece.color, target));
                let mv = ChessMove::flagged(from, target, flags);
                push_if_safe(board, king, piece.color, mv, out);
            }
        }
    }

    // En passant: the neighboring enemy pawn must be the one that double
    // pushed on the previous half-move, and the square behind it must be
    // free. The captured pawn's square is carried as the move's reference.
    for d_file in [-1, 1] {
        let Ok(beside) = offset_location(from, d_file, 0) else {
            continue;
        };
        if board.just_double_stepped() != Some(beside) {
            continue;
        }
        let Some(other) = board.view(beside) else {
            continue;
        };
        if other.color == piece.color || other.kind != PieceKind::Pawn {
            continue;
        }
        let Ok(behind) = offset_location(beside, 0, forward) else {
            continue;
        };
        if board.view(behind).is_some() {
            continue;
        }
        let mv = ChessMove::flagged(from, behind, MoveFlags::EN_PASSANT)
            .with_reference(beside);
        push_if_safe(board, king, piece.color, mv, out);
    }

    Ok(())
}

fn promotion_flag(color: Color, to: BoardLocation) -> MoveFlags {
    if to.1 == color.promotion_rank() {
        MoveFlags::PROMOTION
    } else {
        MoveFlags::NONE
    }
}

fn push_if_safe(
    board: &Board,
    king: BoardLocation,
    color: Color,
    mv: ChessMove,
    out: &mut LegalMoveSet,
) {
    if !would_be_attacked_after(board, king, color, &mv) {
        out.push(mv);
    }
}
