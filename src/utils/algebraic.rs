//! Algebraic coordinate conversions ("e4" <-> board locations).
//!
//! Rank digits count from the bottom of the rendered board while the grid's
//! rank 0 is the top row of the record, so the two are mirrored here.

use crate::errors::EngineError;
use crate::game_state::chess_types::{in_bounds, BoardLocation};

/// Convert a square name (for example: "e4") to a board location.
pub fn algebraic_to_location(text: &str) -> Result<BoardLocation, EngineError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(EngineError::InvalidSquareName {
            found: text.to_owned(),
        });
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(EngineError::InvalidSquareName {
            found: text.to_owned(),
        });
    }

    Ok(((file - b'a') as i8, (b'8' - rank) as i8))
}

/// Convert a board location to its square name (for example: "e4").
pub fn location_to_algebraic(at: BoardLocation) -> Result<String, EngineError> {
    if !in_bounds(at) {
        return Err(EngineError::OutOfBounds);
    }

    let file_char = char::from(b'a' + at.0 as u8);
    let rank_char = char::from(b'8' - at.1 as u8);
    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, location_to_algebraic};
    use crate::errors::EngineError;

    #[test]
    fn round_trip_square_names() {
        assert_eq!(algebraic_to_location("a8").expect("a8 should parse"), (0, 0));
        assert_eq!(algebraic_to_location("h1").expect("h1 should parse"), (7, 7));
        assert_eq!(algebraic_to_location("e2").expect("e2 should parse"), (4, 6));
        assert_eq!(location_to_algebraic((0, 0)).expect("(0,0) should convert"), "a8");
        assert_eq!(location_to_algebraic((4, 6)).expect("(4,6) should convert"), "e2");
    }

    #[test]
    fn malformed_names_are_rejected() {
        for bad in ["", "e", "e44", "i4", "e9", "4e"] {
            assert!(matches!(
                algebraic_to_location(bad),
                Err(EngineError::InvalidSquareName { .. })
            ));
        }
        assert_eq!(location_to_algebraic((8, 0)), Err(EngineError::OutOfBounds));
    }
}
