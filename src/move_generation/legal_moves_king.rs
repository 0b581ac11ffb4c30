//! King steps and castling.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{
    offset_location, BoardLocation, Piece, PieceKind, BOARD_SIZE,
};
use crate::move_generation::attack_checks::{is_square_attacked, EIGHT_WAY_STEPS};
use crate::move_generation::trial_move::would_be_attacked_after;
use crate::moves::chess_move::{ChessMove, LegalMoveSet, MoveFlags};

pub fn generate_king_moves(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    out: &mut LegalMoveSet,
) -> Result<(), EngineError> {
    for &(d_file, d_rank) in &EIGHT_WAY_STEPS {
        let Ok(target) = offset_location(from, d_file, d_rank) else {
            continue;
        };
        let mv = match board.view(target) {
            Some(other) if other.color == piece.color => continue,
            Some(_) => ChessMove::flagged(from, target, MoveFlags::CAPTURE),
            None => ChessMove::new(from, target),
        };
        // The king's own relocation changes its exposure, so the destination
        // is tested both as the board stands and after the move is played.
        if is_square_attacked(board, target, piece.color)
            || would_be_attacked_after(board, target, piece.color, &mv)
        {
            continue;
        }
        out.push(mv);
    }

    generate_castle_moves(board, from, piece, out);

    Ok(())
}

/// Castling eligibility: an unmoved, unchecked king whose path scan toward a
/// corner is bounded by that corner, and an unmoved rook of the same color
/// sitting on it.
fn generate_castle_moves(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    out: &mut LegalMoveSet,
) {
    if board.has_moved(from) || is_square_attacked(board, from, piece.color) {
        return;
    }

    try_castle_side(board, from, piece, -1, out);
    try_castle_side(board, from, piece, 1, out);
}

fn try_castle_side(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    direction: i8,
    out: &mut LegalMoveSet,
) {
    let corner_file = if direction < 0 { 0 } else { BOARD_SIZE - 1 };

    // The first occupied or attacked square toward the corner bounds the
    // path; castling needs that bound to be the corner itself.
    let mut boundary = corner_file;
    let mut file = from.0 + direction;
    while file >= 0 && file < BOARD_SIZE {
        let square = (file, from.1);
        if board.view(square).is_some() || is_square_attacked(board, square, piece.color) {
            boundary = file;
            break;
        }
        file += direction;
    }
    if boundary != corner_file {
        return;
    }

    let corner = (corner_file, from.1);
    let Some(rook) = board.view(corner) else {
        return;
    };
    if rook.kind != PieceKind::Rook || rook.color != piece.color || board.has_moved(corner) {
        return;
    }

    let Ok(to) = offset_location(from, 2 * direction, 0) else {
        return;
    };
    out.push(ChessMove::flagged(from, to, MoveFlags::CASTLE).with_reference(corner));
}
