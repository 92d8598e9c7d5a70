//! Dispatch from a piece kind to its movement rule and path generator.

use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::bishop_moves::{bishop_path, is_bishop_move};
use crate::moves::king_moves::is_king_move;
use crate::moves::knight_moves::is_knight_move;
use crate::moves::pawn_moves::pawn_path;
use crate::moves::queen_moves::{is_queen_move, queen_path};
use crate::moves::rook_moves::{is_rook_move, rook_path};

/// Kinds whose intermediate squares must be empty.
#[inline]
pub const fn is_sliding(kind: PieceKind) -> bool {
    !matches!(kind, PieceKind::Knight | PieceKind::King)
}

/// Purely geometric legality. `None` for pawns, whose rule needs the
/// registries (see `SideRegistry::pawn_move_legal`).
pub fn is_geometric_move(kind: PieceKind, from: Square, to: Square) -> Option<bool> {
    let legal = match kind {
        PieceKind::Pawn => return None,
        PieceKind::Rook => is_rook_move(from, to),
        PieceKind::Knight => is_knight_move(from, to),
        PieceKind::Bishop => is_bishop_move(from, to),
        PieceKind::Queen => is_queen_move(from, to),
        PieceKind::King => is_king_move(from, to),
    };
    Some(legal)
}

/// Ordered squares strictly between `from` and `to` for a move already
/// known to be legal for `kind`.
pub fn move_path(kind: PieceKind, from: Square, to: Square) -> Vec<Square> {
    match kind {
        PieceKind::Pawn => pawn_path(from, to),
        PieceKind::Rook => rook_path(from, to),
        PieceKind::Bishop => bishop_path(from, to),
        PieceKind::Queen => queen_path(from, to),
        PieceKind::Knight | PieceKind::King => Vec::new(),
    }
}

/// Walks from `from` towards `to` one step at a time, excluding both ends.
/// `from` and `to` must share a file, a rank or a diagonal.
pub(crate) fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let (d_file, d_rank) = Square::delta(from, to);
    let (file_step, rank_step) = (d_file.signum(), d_rank.signum());
    let mut path = Vec::new();

    let mut current = from.offset(file_step, rank_step);
    while let Some(square) = current {
        if square == to {
            break;
        }
        path.push(square);
        current = square.offset(file_step, rank_step);
    }

    path
}
