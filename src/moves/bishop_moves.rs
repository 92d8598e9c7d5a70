//! Bishop geometry: diagonals of any non-zero length.

use crate::game_state::chess_types::Square;
use crate::moves::move_rules::squares_between;

pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

/// Legal iff `|d_file| == |d_rank| > 0`.
#[inline]
pub const fn is_bishop_move(from: Square, to: Square) -> bool {
    BISHOP_RAYS[from.index() as usize] & to.mask() != 0
}

/// Squares strictly between `from` and `to`; empty when the move is not a
/// bishop move.
pub fn bishop_path(from: Square, to: Square) -> Vec<Square> {
    if !is_bishop_move(from, to) {
        return Vec::new();
    }
    squares_between(from, to)
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let sq_i = sq as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(sq_i, 1, 1);
        rays |= trace_ray_const(sq_i, -1, 1);
        rays |= trace_ray_const(sq_i, 1, -1);
        rays |= trace_ray_const(sq_i, -1, -1);

        table[sq] = rays;
        sq += 1;
    }

    table
}

const fn trace_ray_const(square: i32, file_step: i32, rank_step: i32) -> u64 {
    let mut file = (square % 8) + file_step;
    let mut rank = (square / 8) + rank_step;
    let mut ray = 0u64;

    while file >= 0 && file < 8 && rank >= 0 && rank < 8 {
        let target = (rank * 8 + file) as usize;
        ray |= 1u64 << target;
        file += file_step;
        rank += rank_step;
    }

    ray
}
