//! Play a seeded random game and print the result.
//!
//! Usage: random_match [seed]

use std::env;

use ivory_chess::game_state::board::Board;
use ivory_chess::utils::random_playout::{run_random_playout, PlayoutConfig, PlayoutOutcome};
use ivory_chess::utils::render_board::render_board;

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(1);

    let config = PlayoutConfig {
        seed,
        ..PlayoutConfig::default()
    };

    match run_random_playout(&config) {
        Ok(report) => {
            let board = Board::from_placement(&report.final_placement)
                .expect("playout placement should always parse");
            println!("{}", render_board(&board));
            println!("seed {seed}: {}", report.moves.join(" "));
            match report.outcome {
                PlayoutOutcome::Checkmate { loser } => {
                    println!("checkmate after {} plies, {loser:?} lost", report.plies);
                }
                PlayoutOutcome::Unfinished => {
                    println!("no mate within {} plies", report.plies);
                }
            }
        }
        Err(err) => eprintln!("playout failed: {err}"),
    }
}
