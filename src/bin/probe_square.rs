//! Print the legal destinations for the piece on a given square.
//!
//! Usage: probe_square <placement> <square>
//! Example: probe_square "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR" e2

use std::env;

use ivory_chess::errors::EngineError;
use ivory_chess::game_state::board::Board;
use ivory_chess::move_generation::legal_move_generator::legal_moves;
use ivory_chess::moves::chess_move::MoveFlags;
use ivory_chess::utils::algebraic::{algebraic_to_location, location_to_algebraic};

fn probe(placement: &str, square: &str) -> Result<Vec<String>, EngineError> {
    let board = Board::from_placement(placement)?;
    let from = algebraic_to_location(square)?;
    let set = legal_moves(&board, from)?;

    let mut lines = Vec::with_capacity(set.len());
    for mv in set.iter() {
        let mut line = location_to_algebraic(mv.to)?;
        if mv.flags.contains(MoveFlags::CAPTURE) {
            line.push_str(" (capture)");
        }
        if mv.flags.contains(MoveFlags::CASTLE) {
            line.push_str(" (castle)");
        }
        if mv.flags.contains(MoveFlags::EN_PASSANT) {
            line.push_str(" (en passant)");
        }
        if mv.flags.contains(MoveFlags::PROMOTION) {
            line.push_str(" (promotion)");
        }
        lines.push(line);
    }
    Ok(lines)
}

fn main() {
    let mut args = env::args().skip(1);
    let (Some(placement), Some(square)) = (args.next(), args.next()) else {
        eprintln!("usage: probe_square <placement> <square>");
        return;
    };

    match probe(&placement, &square) {
        Ok(lines) if lines.is_empty() => println!("no legal moves from {square}"),
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(err) => eprintln!("{err}"),
    }
}
