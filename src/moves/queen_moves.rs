use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_path, is_bishop_move, BISHOP_RAYS};
use crate::moves::rook_moves::{is_rook_move, rook_path, ROOK_RAYS};

pub const QUEEN_RAYS: [u64; 64] = generate_queen_rays();

#[inline]
pub const fn is_queen_move(from: Square, to: Square) -> bool {
    QUEEN_RAYS[from.index() as usize] & to.mask() != 0
}

/// A legal queen move is rook-shaped or bishop-shaped, never both.
pub fn queen_path(from: Square, to: Square) -> Vec<Square> {
    if is_bishop_move(from, to) {
        bishop_path(from, to)
    } else if is_rook_move(from, to) {
        rook_path(from, to)
    } else {
        Vec::new()
    }
}

const fn generate_queen_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        table[sq] = BISHOP_RAYS[sq] | ROOK_RAYS[sq];
        sq += 1;
    }

    table
}
