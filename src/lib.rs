//! Crate root module declarations for the Ivory Chess rules engine.
//!
//! This file exposes all top-level subsystems (position model, move values,
//! legal move generation, the interactive game session, and utility helpers)
//! so binaries, tests, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod trial_move;
}

pub mod game {
    pub mod game_controller;
    pub mod selection;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_generator;
    pub mod placement_parser;
    pub mod random_playout;
    pub mod render_board;
}
