//! Canonical rule constants.
//!
//! Starting layouts list every piece as `(kind, file, rank)` in identity
//! order: eight pawns, then rook, rook, knight, knight, bishop, bishop,
//! queen, king. Pieces of the same kind are numbered from 1 in that order.

use crate::game_state::chess_types::{Color, PieceKind};

pub const PIECES_PER_SIDE: usize = 16;

const BACK_RANK_FILES: [(PieceKind, u8); 8] = [
    (PieceKind::Rook, 1),
    (PieceKind::Rook, 8),
    (PieceKind::Knight, 2),
    (PieceKind::Knight, 7),
    (PieceKind::Bishop, 3),
    (PieceKind::Bishop, 6),
    (PieceKind::Queen, 4),
    (PieceKind::King, 5),
];

/// Rank holding a side's pawns at game start.
#[inline]
pub const fn pawn_home_rank(color: Color) -> u8 {
    match color {
        Color::Light => 2,
        Color::Dark => 7,
    }
}

#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::Light => 1,
        Color::Dark => 8,
    }
}

/// The 16 starting placements for `color`.
pub const fn starting_layout(color: Color) -> [(PieceKind, u8, u8); PIECES_PER_SIDE] {
    let mut layout = [(PieceKind::Pawn, 1, 1); PIECES_PER_SIDE];
    let pawn_rank = pawn_home_rank(color);
    let piece_rank = back_rank(color);

    let mut i = 0usize;
    while i < 8 {
        layout[i] = (PieceKind::Pawn, i as u8 + 1, pawn_rank);
        let (kind, file) = BACK_RANK_FILES[i];
        layout[8 + i] = (kind, file, piece_rank);
        i += 1;
    }

    layout
}
