//! Crate root module declarations for the shuffled-roles chess rules engine.
//!
//! Each game draws a random permutation of movement roles for the five
//! non-king piece kinds; a piece drawn as a bishop may move like a knight.
//! The engine keeps board state, generates pseudo-legal and legal moves per
//! role, detects check, executes special moves and decides checkmate and
//! stalemate. Rendering and input handling live outside this crate.

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_session;
    pub mod game_state;
}

pub mod roles {
    pub mod role_assignment;
    pub mod role_map;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}
