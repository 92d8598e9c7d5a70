//! Knight geometry. Knights jump, so there is never a path to check.

use crate::game_state::chess_types::Square;

pub const KNIGHT_TARGETS: [u64; 64] = generate_knight_targets();

/// Legal iff `(|d_file|, |d_rank|)` is `(1, 2)` or `(2, 1)`.
#[inline]
pub const fn is_knight_move(from: Square, to: Square) -> bool {
    KNIGHT_TARGETS[from.index() as usize] & to.mask() != 0
}

const fn generate_knight_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;

        targets |= set_if_valid(file + 1, rank + 2);
        targets |= set_if_valid(file + 2, rank + 1);
        targets |= set_if_valid(file + 2, rank - 1);
        targets |= set_if_valid(file + 1, rank - 2);
        targets |= set_if_valid(file - 1, rank - 2);
        targets |= set_if_valid(file - 2, rank - 1);
        targets |= set_if_valid(file - 2, rank + 1);
        targets |= set_if_valid(file - 1, rank + 2);

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn set_if_valid(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }

    let square = (rank as usize) * 8 + (file as usize);
    1u64 << square
}
