//! Placement-string serializer, the inverse of the parser for the layout
//! field only. Row iteration order matches parsing exactly so supported
//! strings round-trip.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, BOARD_SIZE};

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in 0..BOARD_SIZE {
        let mut empty_run = 0u8;

        for file in 0..BOARD_SIZE {
            match board.view((file, rank)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_char(piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if rank < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}

/// Map a piece to its placement letter. Uppercase is White.
pub fn piece_to_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}
