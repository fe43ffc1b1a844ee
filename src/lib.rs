//! Crate root module declarations for the Plum Checkers engine.
//!
//! Exposes the board model, the rules engine and turn enumeration, the
//! player and match controller, and the console/test providers so the
//! binaries, benches and tests can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod checkers_types;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
    pub mod rules_engine;
}

pub mod players {
    pub mod player;
}

pub mod match_control {
    pub mod match_config;
    pub mod match_controller;
    pub mod providers;
}

pub mod utils {
    pub mod algebraic;
    pub mod console_io;
    pub mod logging;
    pub mod random_playout;
    pub mod render_board;
}
