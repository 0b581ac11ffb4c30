//! Placement-string parser.
//!
//! Reads the piece-layout field of a position record: rows separated by `/`,
//! first record row first, digit runs for consecutive empty squares, letters
//! per piece (uppercase White, lowercase Black). Side-to-move, castling
//! rights, en-passant targets, and move counters are not part of this field
//! and are never consumed here.

use crate::errors::EngineError;
use crate::game_state::chess_types::{Color, Piece, PieceKind, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

/// The raw grid a placement string describes, indexed `[file][rank]`.
pub type PlacementGrid = [[Option<Piece>; SIZE]; SIZE];

/// Parse a placement string into a grid, or fail without partial output.
pub fn parse_placement(text: &str) -> Result<PlacementGrid, EngineError> {
    let rows: Vec<&str> = text.trim().split('/').collect();
    if rows.len() != SIZE {
        return Err(EngineError::BadRankCount { found: rows.len() });
    }

    let mut cells: PlacementGrid = [[None; SIZE]; SIZE];

    for (rank, row) in rows.iter().enumerate() {
        let mut file = 0usize;
        for ch in row.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(EngineError::InvalidPlacementChar { character: ch });
                }
                file += run as usize;
                continue;
            }

            let piece = piece_from_char(ch)
                .ok_or(EngineError::InvalidPlacementChar { character: ch })?;
            if file >= SIZE {
                return Err(EngineError::BadRankLength {
                    rank,
                    length: file + 1,
                });
            }
            cells[file][rank] = Some(piece);
            file += 1;
        }

        if file != SIZE {
            return Err(EngineError::BadRankLength { rank, length: file });
        }
    }

    Ok(cells)
}

/// Map a placement letter to a piece. Uppercase is White.
pub fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
