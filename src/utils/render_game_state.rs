//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the CLI, tests and diagnostics.

use crate::game_state::chess_types::*;

/// Render the board with rank 8 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=8u8).rev() {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 1..=8u8 {
            let piece = Square::new(file, rank).and_then(|sq| game_state.piece_on(sq));
            match piece {
                Some((color, kind)) => out.push(piece_to_unicode(color, kind)),
                None => out.push('·'),
            }

            if file < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
