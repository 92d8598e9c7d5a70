//! Crate root module declarations for the wipeout chess variant.
//!
//! The variant plays on a standard board with standard piece movement but
//! without castling, en passant, promotion or check. A side loses the moment
//! every piece of any one kind it owns has been captured.
//!
//! The public surface is `GameState::new_game`, `GameState::attempt_move`
//! (or `try_move` for a rejection reason) and `GameState::outcome`.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod side_registry;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod placement_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{Color, GameState, Location, Outcome, PieceKind, Square};
pub use game_state::game_state::MoveReport;
