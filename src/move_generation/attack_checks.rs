//! Attack detection computed directly from piece placement.
//!
//! Deliberately independent of the move generator, so king-safety filtering
//! can query it from inside generation without recursion. Results depend
//! only on board contents, never on whose turn it is.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_location, BoardLocation, Color, PieceKind};

/// Orthogonal ray directions (rook lines).
pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Diagonal ray directions (bishop lines).
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

/// All eight queen/king directions.
pub const EIGHT_WAY_STEPS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Knight leaper offsets.
pub const KNIGHT_STEPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// True iff any piece of the color opposing `defender` could capture on
/// `square` on its next move.
pub fn is_square_attacked(board: &Board, square: BoardLocation, defender: Color) -> bool {
    attacked_along_rays(board, square, defender, &ORTHOGONAL_STEPS, PieceKind::Rook)
        || attacked_along_rays(board, square, defender, &DIAGONAL_STEPS, PieceKind::Bishop)
        || attacked_by_knight(board, square, defender)
        || attacked_by_pawn(board, square, defender)
        || attacked_by_king(board, square, defender)
}

fn attacked_along_rays(
    board: &Board,
    square: BoardLocation,
    defender: Color,
    steps: &[(i8, i8)],
    slider: PieceKind,
) -> bool {
    for &(d_file, d_rank) in steps {
        let mut cursor = square;
        loop {
            cursor = match offset_location(cursor, d_file, d_rank) {
                Ok(next) => next,
                Err(_) => break,
            };
            let Some(piece) = board.view(cursor) else {
                continue;
            };
            if piece.color != defender
                && (piece.kind == slider || piece.kind == PieceKind::Queen)
            {
                return true;
            }
            // The first occupied square blocks the ray either way.
            break;
        }
    }
    false
}

fn attacked_by_knight(board: &Board, square: BoardLocation, defender: Color) -> bool {
    for &(d_file, d_rank) in &KNIGHT_STEPS {
        let Ok(target) = offset_location(square, d_file, d_rank) else {
            continue;
        };
        if let Some(piece) = board.view(target) {
            if piece.color != defender && piece.kind == PieceKind::Knight {
                return true;
            }
        }
    }
    false
}

/// Pawns attack the two diagonal cells one step in the defender's forward
/// direction: that is where an enemy pawn advancing toward the defender sits.
fn attacked_by_pawn(board: &Board, square: BoardLocation, defender: Color) -> bool {
    let forward = defender.forward_step();
    for d_file in [-1, 1] {
        let Ok(target) = offset_location(square, d_file, forward) else {
            continue;
        };
        if let Some(piece) = board.view(target) {
            if piece.color != defender && piece.kind == PieceKind::Pawn {
                return true;
            }
        }
    }
    false
}

fn attacked_by_king(board: &Board, square: BoardLocation, defender: Color) -> bool {
    for &(d_file, d_rank) in &EIGHT_WAY_STEPS {
        let Ok(target) = offset_location(square, d_file, d_rank) else {
            continue;
        };
        if let Some(piece) = board.view(target) {
            if piece.color != defender && piece.kind == PieceKind::King {
                return true;
            }
        }
    }
    false
}

/// Locate `color`'s king, failing loudly when the position has none. A
/// kingless position is malformed, not "never in check".
pub fn king_location(board: &Board, color: Color) -> Result<BoardLocation, EngineError> {
    board
        .find(PieceKind::King, color)
        .ok_or(EngineError::MissingKing { color })
}

pub fn is_king_in_check(board: &Board, color: Color) -> Result<bool, EngineError> {
    let king = king_location(board, color)?;
    Ok(is_square_attacked(board, king, color))
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked, king_location};
    use crate::errors::EngineError;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;

    #[test]
    fn rook_rays_are_blocked_by_interposed_pieces() {
        let open = Board::from_placement("3r4/8/8/8/8/8/8/3K4")
            .expect("placement should parse");
        assert!(is_square_attacked(&open, (3, 7), Color::White));

        let blocked = Board::from_placement("3r4/8/8/8/3P4/8/8/3K4")
            .expect("placement should parse");
        assert!(!is_square_attacked(&blocked, (3, 7), Color::White));
    }

    #[test]
    fn pawns_attack_only_diagonally_forward() {
        let board = Board::from_placement("8/8/8/3p4/8/8/8/4K3")
            .expect("placement should parse");

        // The black pawn on d5 attacks c4 and e4 from White's point of view.
        assert!(is_square_attacked(&board, (2, 4), Color::White));
        assert!(is_square_attacked(&board, (4, 4), Color::White));
        // Not the square straight ahead, and not the squares behind it.
        assert!(!is_square_attacked(&board, (3, 4), Color::White));
        assert!(!is_square_attacked(&board, (2, 2), Color::White));
    }

    #[test]
    fn knights_leap_over_blockers() {
        let board = Board::from_placement("8/8/8/3n4/3P4/8/8/3K4")
            .expect("placement should parse");
        // d5 knight reaches e3 regardless of the pawn in front of it.
        assert!(is_square_attacked(&board, (4, 5), Color::White));
        assert!(!is_square_attacked(&board, (4, 4), Color::White));
    }

    #[test]
    fn kings_attack_adjacent_squares() {
        let board = Board::from_placement("8/8/8/3k4/8/8/8/4K3")
            .expect("placement should parse");
        assert!(is_square_attacked(&board, (4, 4), Color::White));
        assert!(!is_square_attacked(&board, (5, 5), Color::White));
    }

    #[test]
    fn attack_detection_ignores_the_side_to_move() {
        let mut board = Board::from_placement("3r4/8/8/8/8/8/8/3K4")
            .expect("placement should parse");
        board.set_turn(Color::White);
        let as_white_to_move = is_square_attacked(&board, (3, 7), Color::White);
        board.set_turn(Color::Black);
        let as_black_to_move = is_square_attacked(&board, (3, 7), Color::White);
        assert_eq!(as_white_to_move, as_black_to_move);
    }

    #[test]
    fn missing_king_is_a_loud_failure() {
        let board = Board::from_placement("8/8/8/8/8/8/8/R7").expect("placement should parse");
        assert_eq!(
            king_location(&board, Color::White),
            Err(EngineError::MissingKing { color: Color::White })
        );
    }

    #[test]
    fn check_query_composes_find_and_attack() {
        let board = Board::from_placement("3r4/8/8/8/8/8/8/3K4")
            .expect("placement should parse");
        assert!(is_king_in_check(&board, Color::White).expect("white king should be found"));
    }
}
