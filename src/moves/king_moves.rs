//! King geometry: one step in any of the eight directions.

use crate::game_state::chess_types::Square;

pub const KING_TARGETS: [u64; 64] = generate_king_targets();

#[inline]
pub const fn is_king_move(from: Square, to: Square) -> bool {
    KING_TARGETS[from.index() as usize] & to.mask() != 0
}

const fn generate_king_targets() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut targets = 0u64;

        targets |= set_if_valid(file - 1, rank - 1);
        targets |= set_if_valid(file, rank - 1);
        targets |= set_if_valid(file + 1, rank - 1);
        targets |= set_if_valid(file - 1, rank);
        targets |= set_if_valid(file + 1, rank);
        targets |= set_if_valid(file - 1, rank + 1);
        targets |= set_if_valid(file, rank + 1);
        targets |= set_if_valid(file + 1, rank + 1);

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
