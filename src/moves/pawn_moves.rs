//! Pawn geometry.
//!
//! Unlike the other kinds the pawn rule depends on the moving side, on the
//! pawn's move count and on whether the opponent holds the destination, so
//! the caller supplies those facts.

use crate::game_state::chess_types::{Color, Square};

pub const LIGHT_PAWN_CAPTURES: [u64; 64] = generate_light_pawn_captures();
pub const DARK_PAWN_CAPTURES: [u64; 64] = generate_dark_pawn_captures();

/// Forward-diagonal squares a pawn of `color` on `square` may capture on.
#[inline]
pub const fn pawn_captures(color: Color, square: Square) -> u64 {
    match color {
        Color::Light => LIGHT_PAWN_CAPTURES[square.index() as usize],
        Color::Dark => DARK_PAWN_CAPTURES[square.index() as usize],
    }
}

/// Pawn legality for `color`.
///
/// * moving sideways or backwards is never legal
/// * one forward diagonal step is legal only as a capture
/// * one straight step needs an opponent-free destination
/// * two straight steps additionally need `move_count == 0`
pub fn is_pawn_move(
    color: Color,
    move_count: u32,
    from: Square,
    to: Square,
    opponent_on_destination: bool,
) -> bool {
    let (d_file, d_rank) = Square::delta(from, to);
    if d_rank * color.forward() < 1 {
        return false;
    }

    if pawn_captures(color, from) & to.mask() != 0 {
        return opponent_on_destination;
    }

    if opponent_on_destination || d_file != 0 {
        return false;
    }

    match d_rank.abs() {
        1 => true,
        2 => move_count == 0,
        _ => false,
    }
}

/// The square a double step passes over; empty for every other move.
pub fn pawn_path(from: Square, to: Square) -> Vec<Square> {
    let (d_file, d_rank) = Square::delta(from, to);
    if d_file != 0 || d_rank.abs() != 2 {
        return Vec::new();
    }
    from.offset(0, d_rank.signum()).into_iter().collect()
}

const fn generate_light_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut captures = 0u64;

        if rank < 7 {
            if file > 0 {
                captures |= 1u64 << (sq + 7);
            }
            if file < 7 {
                captures |= 1u64 << (sq + 9);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}

const fn generate_dark_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = sq % 8;
        let rank = sq / 8;
        let mut captures = 0u64;

        if rank > 0 {
            if file > 0 {
                captures |= 1u64 << (sq - 9);
            }
            if file < 7 {
                captures |= 1u64 << (sq - 7);
            }
        }

        table[sq] = captures;
        sq += 1;
    }

    table
}
