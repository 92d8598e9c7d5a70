//! Piece-placement parser.
//!
//! Reads the first field of a FEN string (`rnbqkbnr/pppppppp/8/...`) into
//! per-side `(kind, square, move_count)` placements. Used to set up test
//! fixtures; no other FEN fields exist in this variant.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::pawn_home_rank;
use crate::game_state::chess_types::{Color, PieceKind, Square};

pub type Placements = [Vec<(PieceKind, Square, u32)>; 2];

/// Parse a placement field. Pawns on their home rank get move count 0,
/// every other piece move count 1.
pub fn parse_placement(placement: &str) -> Result<Placements, ChessErrors> {
    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidPlacement(
            "placement must contain 8 ranks".to_owned(),
        ));
    }

    let mut placements: Placements = [Vec::new(), Vec::new()];

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as u8;
        let mut file = 1usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as usize;
                if file > 9 {
                    return Err(ChessErrors::InvalidPlacement(format!(
                        "rank {rank} has too many files"
                    )));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| {
                ChessErrors::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;

            let square = u8::try_from(file)
                .ok()
                .and_then(|file| Square::new(file, rank))
                .ok_or_else(|| {
                    ChessErrors::InvalidPlacement(format!("rank {rank} has too many files"))
                })?;

            let move_count = match kind {
                PieceKind::Pawn if rank == pawn_home_rank(color) => 0,
                _ => 1,
            };
            placements[color.index()].push((kind, square, move_count));
            file += 1;
        }

        if file != 9 {
            return Err(ChessErrors::InvalidPlacement(format!(
                "rank {rank} does not sum to 8 files"
            )));
        }
    }

    Ok(placements)
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}
